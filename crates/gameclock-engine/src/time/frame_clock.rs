use std::time::Duration;

use tokio::time::Instant;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick.
    pub dt: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Built on `tokio::time::Instant` so a paused test runtime drives it too.
///
/// Delta time is clamped. The upper clamp bounds how much virtual time one
/// frame may inject after a stall (debugger, suspended terminal); clocks
/// lose at most the excess over `dt_max`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps (0 .. 5s).
    pub fn new() -> Self {
        Self::with_clamps(Duration::ZERO, Duration::from_secs(5))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Call when resuming after a deliberate pause so the gap is not counted.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tick_measures_elapsed() {
        let mut clock = FrameClock::new();
        tokio::time::advance(Duration::from_millis(250)).await;
        let ft = clock.tick();
        assert_eq!(ft.dt, Duration::from_millis(250));
        assert_eq!(ft.frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_clamps_stalls() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(1));
        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(clock.tick().dt, Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn reset_discards_gap() {
        let mut clock = FrameClock::new();
        tokio::time::advance(Duration::from_secs(2)).await;
        clock.reset();
        assert_eq!(clock.tick().dt, Duration::ZERO);
    }
}
