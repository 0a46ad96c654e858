//! Frame loop.
//!
//! Drives an [`App`](crate::core::App) at a fixed frame interval on `tokio`
//! and presents its draw lists to a text surface.

mod frame_loop;
mod surface;

pub use frame_loop::{Runtime, RuntimeConfig, RuntimeCtx};
pub use surface::Surface;
