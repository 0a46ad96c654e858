//! Two-player game clock component.
//!
//! [`GameClock`] owns both countdowns and reacts to host props
//! ([`ClockProps`]); time arithmetic lives in `gameclock-time`, timers in the
//! engine's [`Scheduler`](gameclock_engine::time::Scheduler).

mod game_clock;
mod props;

pub use game_clock::{ClockEvent, GameClock};
pub use props::{ClockProps, Side, UnknownSide};
