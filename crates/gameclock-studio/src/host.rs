//! Scripted host application: plays a fixed list of move times and drives
//! the clock's props the way a real game front-end would.

use std::collections::VecDeque;
use std::time::Duration;

use gameclock_ui::clock::ClockProps;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Thinking { left: Duration },
    Paused { left: Duration },
    Finished,
}

/// Host-side game state owner.
///
/// Each entry of `moves` is how long the side to move thinks before moving.
/// After move number `pause.0` the game is adjourned for `pause.1`.
#[derive(Debug)]
pub struct MatchHost {
    props: ClockProps,
    moves: VecDeque<Duration>,
    pause: Option<(usize, Duration)>,
    played: usize,
    phase: Phase,
}

impl MatchHost {
    /// Starts the game: `props` should name the first side to move.
    pub fn new(props: ClockProps, moves: Vec<Duration>, pause: Option<(usize, Duration)>) -> Self {
        let mut moves: VecDeque<Duration> = moves.into();
        let (phase, run) = match moves.pop_front() {
            Some(left) => (Phase::Thinking { left }, true),
            None => (Phase::Finished, false),
        };
        Self { props: props.run(run), moves, pause, played: 0, phase }
    }

    #[inline]
    pub fn props(&self) -> &ClockProps {
        &self.props
    }

    #[inline]
    pub fn played(&self) -> usize {
        self.played
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        matches!(self.phase, Phase::Paused { .. })
    }

    /// Time until the host next changes the props.
    pub fn until_next_change(&self) -> Option<Duration> {
        match self.phase {
            Phase::Thinking { left } | Phase::Paused { left } => Some(left),
            Phase::Finished => None,
        }
    }

    /// Advances host time by `dt` (at most [`until_next_change`](Self::until_next_change)).
    ///
    /// Returns the new props when they changed.
    pub fn advance(&mut self, dt: Duration) -> Option<ClockProps> {
        match self.phase {
            Phase::Thinking { left } if dt < left => {
                self.phase = Phase::Thinking { left: left - dt };
                None
            }
            Phase::Paused { left } if dt < left => {
                self.phase = Phase::Paused { left: left - dt };
                None
            }
            Phase::Thinking { .. } => {
                self.played += 1;
                let mover = self.props.current_turn;
                self.props.current_turn = mover.other();
                info!("move {}: {mover} moved", self.played);

                match self.pause {
                    Some((after, left)) if after == self.played && !self.moves.is_empty() => {
                        info!("game adjourned for {left:?}");
                        self.props.run = false;
                        self.phase = Phase::Paused { left };
                    }
                    _ => self.next_move(),
                }
                Some(self.props.clone())
            }
            Phase::Paused { .. } => {
                info!("game resumed");
                self.props.run = true;
                self.next_move();
                Some(self.props.clone())
            }
            Phase::Finished => None,
        }
    }

    fn next_move(&mut self) {
        match self.moves.pop_front() {
            Some(left) => self.phase = Phase::Thinking { left },
            None => {
                info!("script finished after {} moves", self.played);
                self.props.run = false;
                self.phase = Phase::Finished;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gameclock_ui::clock::Side;

    fn s(v: u64) -> Duration { Duration::from_secs(v) }

    #[test]
    fn moves_alternate_turns() {
        let mut host = MatchHost::new(ClockProps::new("1:00"), vec![s(2), s(3)], None);
        assert!(host.props().run);
        assert_eq!(host.until_next_change(), Some(s(2)));

        assert_eq!(host.advance(s(1)), None);
        let props = host.advance(s(1)).unwrap();
        assert_eq!(props.current_turn, Side::Black);
        assert!(props.run);

        let props = host.advance(s(3)).unwrap();
        assert_eq!(props.current_turn, Side::White);
        assert!(!props.run);
        assert!(host.is_finished());
        assert_eq!(host.until_next_change(), None);
    }

    #[test]
    fn adjournment_stops_and_restarts_the_clock() {
        let mut host = MatchHost::new(ClockProps::new("1:00"), vec![s(1), s(1)], Some((1, s(5))));
        let props = host.advance(s(1)).unwrap();
        assert!(!props.run);
        assert!(host.is_paused());
        assert_eq!(host.until_next_change(), Some(s(5)));

        let props = host.advance(s(5)).unwrap();
        assert!(props.run);
        assert_eq!(props.current_turn, Side::Black);
        assert_eq!(host.played(), 1);
    }

    #[test]
    fn empty_script_never_runs() {
        let host = MatchHost::new(ClockProps::new("1:00"), Vec::new(), None);
        assert!(!host.props().run);
        assert!(host.is_finished());
    }
}
