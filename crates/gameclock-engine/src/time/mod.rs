//! Time subsystem.
//!
//! - [`FrameClock`] measures real elapsed time between frames.
//! - [`Scheduler`] is a virtual-time timer queue: periodic and one-shot timers
//!   that fire only when the owner advances it, so behavior is deterministic
//!   and testable without sleeping.
//!
//! Intended usage: one `FrameClock` per runtime loop; feed each
//! `FrameTime::dt` into the scheduler with [`Scheduler::advance`].

mod frame_clock;
mod scheduler;

pub use frame_clock::{FrameClock, FrameTime};
pub use scheduler::{Fired, Scheduler, TimerHandle};
