use std::time::Duration;

use gameclock_engine::coords::{Rect, Vec2};
use gameclock_engine::time::{Fired, Scheduler, TimerHandle};
use gameclock_time::{ClockTime, ParseError};
use log::{debug, trace, warn};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;
use crate::widgets::flex::{Column, Row};
use crate::widgets::text::Text;

use super::props::{ClockProps, Side};

/// Cells between the two participant columns.
const COLUMN_GAP: u16 = 4;

/// Timer payloads scheduled by a [`GameClock`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClockEvent {
    /// Periodic tick while running.
    Tick,
    /// Delayed first decrement after a turn switch.
    GraceDecrement(Side),
}

/// Two-player countdown clock.
///
/// Lifecycle:
/// 1. [`mount`](Self::mount) seeds both clocks from `time_format` and arms
///    the tick when `run` is set.
/// 2. The host calls [`update`](Self::update) with fresh props whenever they
///    change, and forwards every scheduler fire to
///    [`on_timer`](Self::on_timer).
/// 3. [`unmount`](Self::unmount) cancels every timer the instance owns.
///
/// Only the side to move is decremented. On the first tick after a turn
/// switch the decrement is deferred by half a tick period.
///
/// All scheduling state is per instance, so several clocks can share one
/// scheduler: each ignores fires whose handle it does not own.
#[derive(Debug)]
pub struct GameClock {
    turn: Side,
    /// Turn seen by the previous tick; a mismatch marks the first tick after
    /// a switch.
    last_ticked: Side,
    white: Result<ClockTime, ParseError>,
    black: Result<ClockTime, ParseError>,
    white_name: String,
    black_name: String,
    run: bool,
    tick_period: Duration,
    tick: Option<TimerHandle>,
    grace: Option<TimerHandle>,
}

impl GameClock {
    pub fn mount(props: ClockProps, sched: &mut Scheduler<ClockEvent>) -> Self {
        let seed = props.time_format.parse::<ClockTime>();
        if let Err(err) = &seed {
            warn!("game clock: unusable time format {:?}: {err}", props.time_format);
        }

        let mut clock = Self {
            turn: props.current_turn,
            last_ticked: props.current_turn,
            white: seed.clone(),
            black: seed,
            white_name: props.white,
            black_name: props.black,
            run: props.run,
            tick_period: props.tick_period,
            tick: None,
            grace: None,
        };
        if clock.run {
            clock.arm_tick(sched);
        }

        debug!(
            "game clock mounted: {} to move, {}, running={}",
            clock.turn,
            clock.time_text(Side::White),
            clock.run,
        );
        clock
    }

    /// Applies new host props. `time_format` is ignored after mount.
    pub fn update(&mut self, props: ClockProps, sched: &mut Scheduler<ClockEvent>) {
        if props.current_turn != self.turn {
            debug!("game clock: turn {} -> {}", self.turn, props.current_turn);
            self.turn = props.current_turn;
            // A grace decrement still in flight belongs to the side that just
            // lost the move.
            if self.cancel_grace(sched) {
                trace!("game clock: pending grace decrement preempted");
            }
        }

        self.white_name = props.white;
        self.black_name = props.black;

        let period_changed = props.tick_period != self.tick_period;
        self.tick_period = props.tick_period;

        match (self.run, props.run) {
            (true, false) => {
                debug!("game clock: paused");
                self.run = false;
                self.cancel_tick(sched);
                self.cancel_grace(sched);
            }
            (false, true) => {
                debug!("game clock: resumed");
                self.run = true;
                self.arm_tick(sched);
            }
            (true, true) if period_changed => {
                debug!("game clock: tick period now {:?}", self.tick_period);
                self.arm_tick(sched);
            }
            _ => {}
        }
    }

    /// Handles one scheduler fire. Returns `true` if a displayed time changed.
    pub fn on_timer(&mut self, fired: &Fired<ClockEvent>, sched: &mut Scheduler<ClockEvent>) -> bool {
        match fired.event {
            ClockEvent::Tick if self.tick == Some(fired.handle) => self.on_tick(sched),
            ClockEvent::GraceDecrement(side) if self.grace == Some(fired.handle) => {
                self.grace = None;
                self.decrement(side)
            }
            _ => {
                trace!("game clock: ignoring foreign or stale timer {:?}", fired.handle);
                false
            }
        }
    }

    /// Tears the instance down, cancelling every timer it owns.
    pub fn unmount(mut self, sched: &mut Scheduler<ClockEvent>) {
        self.cancel_tick(sched);
        self.cancel_grace(sched);
        debug!("game clock unmounted");
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run
    }

    /// `true` while a post-switch decrement is scheduled but not yet applied.
    #[inline]
    pub fn has_pending_grace(&self) -> bool {
        self.grace.is_some()
    }

    /// Remaining time for `side`, or the error that prevented seeding it.
    pub fn time(&self, side: Side) -> Result<ClockTime, &ParseError> {
        self.slot(side).as_ref().copied()
    }

    /// Remaining time as displayed: `"M:SS"`, or `"--:--"` in the error state.
    pub fn time_text(&self, side: Side) -> String {
        match self.slot(side) {
            Ok(t) => t.to_string(),
            Err(_) => ClockTime::FALLBACK_TEXT.to_string(),
        }
    }

    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::White => &self.white_name,
            Side::Black => &self.black_name,
        }
    }

    /// The `(name, time text)` pair rendered for `side`.
    pub fn display(&self, side: Side) -> (&str, String) {
        (self.name(side), self.time_text(side))
    }

    /// A side whose clock has run out, white checked first.
    pub fn expired(&self) -> Option<Side> {
        [Side::White, Side::Black]
            .into_iter()
            .find(|&side| self.time(side).is_ok_and(ClockTime::is_expired))
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn on_tick(&mut self, sched: &mut Scheduler<ClockEvent>) -> bool {
        let side = self.turn;
        if side == self.last_ticked {
            return self.decrement(side);
        }

        self.last_ticked = side;
        self.cancel_grace(sched);
        let delay = self.tick_period / 2;
        self.grace = Some(sched.set_timeout(delay, ClockEvent::GraceDecrement(side)));
        trace!("game clock: first tick for {side}, decrement deferred by {delay:?}");
        false
    }

    fn decrement(&mut self, side: Side) -> bool {
        let Ok(time) = self.slot_mut(side) else {
            return false;
        };
        let next = time.decrement();
        if next == *time {
            return false;
        }
        *time = next;
        trace!("game clock: {side} {next}");
        if next.is_expired() {
            debug!("game clock: {side} flag fell");
        }
        true
    }

    fn arm_tick(&mut self, sched: &mut Scheduler<ClockEvent>) {
        self.cancel_tick(sched);
        self.tick = Some(sched.set_interval(self.tick_period, ClockEvent::Tick));
    }

    fn cancel_tick(&mut self, sched: &mut Scheduler<ClockEvent>) -> bool {
        self.tick.take().is_some_and(|h| sched.cancel(h))
    }

    fn cancel_grace(&mut self, sched: &mut Scheduler<ClockEvent>) -> bool {
        self.grace.take().is_some_and(|h| sched.cancel(h))
    }

    fn slot(&self, side: Side) -> &Result<ClockTime, ParseError> {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Result<ClockTime, ParseError> {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }
}

impl Widget for GameClock {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        self.layout().measure(constraints)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.layout().paint(painter, rect);
    }
}

impl GameClock {
    /// Name above time, white on the left, black on the right.
    fn layout(&self) -> Row {
        let column = |side: Side| {
            let (name, time) = self.display(side);
            Column::new().child(Text::new(name)).child(Text::new(time))
        };
        Row::new().spacing(COLUMN_GAP).child(column(Side::White)).child(column(Side::Black))
    }
}
