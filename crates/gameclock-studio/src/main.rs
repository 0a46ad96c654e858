//! Terminal demo: a scripted match between two players, redrawn in place.
//!
//! Settings come from `GAMECLOCK_TIME`, `GAMECLOCK_WHITE`, `GAMECLOCK_BLACK`,
//! `GAMECLOCK_FIRST` and `GAMECLOCK_PLAIN`; log filtering from `RUST_LOG`.

mod config;
mod host;

use std::time::Duration;

use anyhow::Result;
use gameclock_engine::core::{App, AppControl, FrameCtx};
use gameclock_engine::logging::{init_logging, LoggingConfig};
use gameclock_engine::runtime::{Runtime, RuntimeConfig};
use gameclock_engine::scene::ZIndex;
use gameclock_engine::time::Scheduler;
use gameclock_ui::prelude::*;
use log::{error, info};

use config::StudioConfig;
use host::MatchHost;

/// Think time per move in seconds, alternating sides from the first mover.
const DEMO_MOVES: &[u64] = &[3, 5, 2, 4, 6, 3, 4, 30];
/// The game is adjourned after this many moves.
const ADJOURN_AFTER: usize = 4;
const ADJOURN_FOR: Duration = Duration::from_secs(3);

const VIEWPORT: Vec2 = Vec2::new(40, 4);
const STATUS_ROW: u16 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env()?;
    info!(
        "{} vs {}, {} each, {} to move",
        config.white, config.black, config.time_format, config.first,
    );

    let moves = DEMO_MOVES.iter().copied().map(Duration::from_secs).collect();
    let host = MatchHost::new(config.props(), moves, Some((ADJOURN_AFTER, ADJOURN_FOR)));
    let mut app = StudioApp::new(host);

    let runtime = RuntimeConfig {
        grid_size: VIEWPORT,
        clear_between_frames: !config.plain,
        ..RuntimeConfig::default()
    };
    let frames = Runtime::run(runtime, &mut app, std::io::stdout()).await?;
    info!("presented {frames} frames");
    Ok(())
}

/// Owns the scheduler, the mounted clock and the scripted host.
struct StudioApp {
    sched: Scheduler<ClockEvent>,
    clock: Option<GameClock>,
    host: MatchHost,
    scene: UiScene,
    flag: Option<Side>,
}

impl StudioApp {
    fn new(host: MatchHost) -> Self {
        let mut sched = Scheduler::new();
        let clock = GameClock::mount(host.props().clone(), &mut sched);
        Self { sched, clock: Some(clock), host, scene: UiScene::new(), flag: None }
    }

    /// Advances virtual time by `dt`.
    ///
    /// Host prop changes are applied at their exact instant, between the
    /// timer fires that precede and follow them.
    fn step(&mut self, dt: Duration) {
        let Some(clock) = self.clock.as_mut() else {
            return;
        };

        let mut remaining = dt;
        loop {
            let slice = self.host.until_next_change().map_or(remaining, |d| d.min(remaining));
            self.sched.advance(slice, |s, fired| {
                clock.on_timer(&fired, s);
            });
            remaining -= slice;

            if let Some(props) = self.host.advance(slice) {
                clock.update(props, &mut self.sched);
            }
            if remaining.is_zero() {
                break;
            }
        }

        if self.flag.is_none() {
            self.flag = clock.expired();
            if let Some(side) = self.flag {
                info!("{} ({side}) lost on time", clock.name(side));
            }
        }
    }

    fn is_over(&self) -> bool {
        self.flag.is_some() || self.host.is_finished()
    }

    fn status(&self) -> String {
        let Some(clock) = &self.clock else {
            return String::new();
        };
        if let Some(side) = self.flag {
            format!("{} flag fell", clock.name(side))
        } else if self.host.is_finished() {
            format!("game over after {} moves", self.host.played())
        } else if self.host.is_paused() {
            "adjourned".to_string()
        } else {
            format!("move {}: {} to move", self.host.played() + 1, clock.name(clock.turn()))
        }
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.step(ctx.time.dt);

        let status = self.status();
        let Some(clock) = &self.clock else {
            return AppControl::Exit;
        };
        let list = self.scene.frame(clock, VIEWPORT);
        list.push_text(ZIndex::new(1), status, Vec2::new(0, STATUS_ROW), Some(VIEWPORT.x));
        if let Err(err) = ctx.present(list) {
            error!("present failed: {err:#}");
            return AppControl::Exit;
        }

        if self.is_over() { AppControl::Exit } else { AppControl::Continue }
    }

    fn on_exit(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.unmount(&mut self.sched);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(v: u64) -> Duration { Duration::from_secs(v) }

    fn app(format: &str, moves: &[u64], pause: Option<(usize, Duration)>) -> StudioApp {
        let moves = moves.iter().copied().map(secs).collect();
        let props = ClockProps::new(format).white("Ann").black("Bob");
        StudioApp::new(MatchHost::new(props, moves, pause))
    }

    fn clock(app: &StudioApp) -> &GameClock {
        app.clock.as_ref().unwrap()
    }

    #[test]
    fn switch_lands_after_the_tick_at_the_same_instant() {
        let mut app = app("0:20", &[3, 5], None);
        app.step(secs(3));
        assert_eq!(clock(&app).time_text(Side::White), "0:17");
        assert_eq!(clock(&app).turn(), Side::Black);
        assert_eq!(clock(&app).time_text(Side::Black), "0:20");
    }

    #[test]
    fn new_mover_loses_a_deferred_second() {
        let mut app = app("0:20", &[3, 5], None);
        app.step(secs(3));
        app.step(secs(1));
        assert!(clock(&app).has_pending_grace());
        assert_eq!(clock(&app).time_text(Side::Black), "0:20");
        app.step(Duration::from_millis(500));
        assert_eq!(clock(&app).time_text(Side::Black), "0:19");
    }

    #[test]
    fn large_frame_is_split_at_host_changes() {
        let mut one = app("0:20", &[3, 5, 2], None);
        let mut many = app("0:20", &[3, 5, 2], None);
        one.step(secs(9));
        for _ in 0..9 {
            many.step(secs(1));
        }
        for side in [Side::White, Side::Black] {
            assert_eq!(clock(&one).time_text(side), clock(&many).time_text(side));
        }
    }

    #[test]
    fn adjournment_freezes_both_clocks() {
        let mut app = app("0:20", &[1, 1], Some((1, secs(5))));
        app.step(secs(1));
        let before = (clock(&app).time_text(Side::White), clock(&app).time_text(Side::Black));
        assert!(!clock(&app).is_running());
        assert_eq!(app.status(), "adjourned");

        app.step(Duration::from_millis(4900));
        let after = (clock(&app).time_text(Side::White), clock(&app).time_text(Side::Black));
        assert_eq!(before, after);
    }

    #[test]
    fn flag_fall_ends_the_game() {
        let mut app = app("0:02", &[10], None);
        app.step(secs(2));
        assert_eq!(app.flag, Some(Side::White));
        assert!(app.is_over());
        assert_eq!(app.status(), "Ann flag fell");
    }

    #[test]
    fn exit_unmounts_the_clock() {
        let mut app = app("0:20", &[3], None);
        assert!(!app.sched.is_empty());
        app.on_exit();
        assert!(app.clock.is_none());
        assert!(app.sched.is_empty());
    }

    #[test]
    fn status_names_the_mover() {
        let app = app("0:20", &[3], None);
        assert_eq!(app.status(), "move 1: Ann to move");
    }
}
