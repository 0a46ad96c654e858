use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::time::MissedTickBehavior;

use crate::coords::Vec2;
use crate::core::{App, AppControl, FrameCtx};
use crate::time::FrameClock;

use super::Surface;

/// Frame loop configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Wall-clock time between frames.
    pub frame_interval: Duration,
    /// Size of the text surface in cells.
    pub grid_size: Vec2,
    /// Upper clamp on per-frame delta time.
    pub dt_max: Duration,
    /// Clear the terminal before each presented frame.
    pub clear_between_frames: bool,
    /// Stop after this many frames. `None` = run until exit is requested.
    pub max_frames: Option<u64>,
    /// Exit the loop on Ctrl-C.
    pub handle_ctrl_c: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(100),
            grid_size: Vec2::new(48, 6),
            dt_max: Duration::from_secs(5),
            clear_between_frames: true,
            max_frames: None,
            handle_ctrl_c: true,
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are buffered and applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    exit_requested: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// Entry point for the frame loop.
pub struct Runtime;

impl Runtime {
    /// Runs `app` until it exits, `max_frames` is reached, or Ctrl-C.
    ///
    /// Returns the number of frames that were presented (written).
    pub async fn run<A, W>(config: RuntimeConfig, app: &mut A, out: W) -> Result<u64>
    where
        A: App,
        W: Write + 'static,
    {
        let mut surface = Surface::new(config.grid_size, config.clear_between_frames, Box::new(out));
        let mut clock = FrameClock::with_clamps(Duration::ZERO, config.dt_max);
        let mut ticker = tokio::time::interval(config.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut rctx = RuntimeCtx::default();

        let handle_ctrl_c = config.handle_ctrl_c;
        let interrupt = async move {
            if handle_ctrl_c {
                tokio::signal::ctrl_c().await
            } else {
                std::future::pending::<std::io::Result<()>>().await
            }
        };
        tokio::pin!(interrupt);

        debug!("frame loop started: interval={:?} grid={:?}", config.frame_interval, config.grid_size);

        let mut frames: u64 = 0;
        let result = loop {
            tokio::select! {
                _ = ticker.tick() => {}
                res = &mut interrupt => {
                    if let Err(err) = res.context("failed to listen for Ctrl-C") {
                        break Err(err);
                    }
                    info!("interrupted");
                    break Ok(());
                }
            }

            let time = clock.tick();
            let control = {
                let mut ctx = FrameCtx { time, runtime: &mut rctx, surface: &mut surface };
                app.on_frame(&mut ctx)
            };
            frames += 1;

            if control == AppControl::Exit || rctx.exit_requested() {
                break Ok(());
            }
            if config.max_frames.is_some_and(|max| frames >= max) {
                debug!("frame limit reached");
                break Ok(());
            }
        };

        app.on_exit();
        debug!("frame loop stopped after {frames} frames");
        result.map(|()| surface.presented())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scene::{DrawList, ZIndex};

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Shows elapsed whole seconds; exits after `stop_after`.
    struct Counter {
        elapsed: Duration,
        stop_after: Duration,
        exited: bool,
    }

    impl App for Counter {
        fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
            self.elapsed += ctx.time.dt;
            let mut list = DrawList::new();
            list.push_text(ZIndex::default(), self.elapsed.as_secs().to_string(), Vec2::zero(), None);
            ctx.present(&mut list).unwrap();
            if self.elapsed >= self.stop_after {
                ctx.runtime.exit();
            }
            AppControl::Continue
        }

        fn on_exit(&mut self) {
            self.exited = true;
        }
    }

    fn config() -> RuntimeConfig {
        RuntimeConfig {
            frame_interval: Duration::from_millis(100),
            clear_between_frames: false,
            handle_ctrl_c: false,
            ..RuntimeConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_frames_are_not_rewritten() {
        let buf = SharedBuf::default();
        let mut app = Counter { elapsed: Duration::ZERO, stop_after: Duration::from_secs(3), exited: false };
        let presented = Runtime::run(config(), &mut app, buf.clone()).await.unwrap();

        // "0", "1", "2", "3": ten frames per second, one write per new second.
        assert_eq!(presented, 4);
        assert!(app.exited);
        let text = String::from_utf8(buf.0.borrow().clone()).unwrap();
        assert_eq!(text, "0\n\n1\n\n2\n\n3\n\n");
    }

    #[tokio::test(start_paused = true)]
    async fn frame_limit_stops_loop() {
        let mut app = Counter { elapsed: Duration::ZERO, stop_after: Duration::MAX, exited: false };
        let cfg = RuntimeConfig { max_frames: Some(5), ..config() };
        Runtime::run(cfg, &mut app, SharedBuf::default()).await.unwrap();
        assert!(app.exited);
        assert_eq!(app.elapsed, Duration::from_millis(400));
    }
}
