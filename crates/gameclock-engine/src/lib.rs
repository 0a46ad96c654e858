//! Game clock engine crate.
//!
//! Owns the headless runtime pieces used by higher layers: logging setup,
//! frame timing and the virtual-time scheduler, cell geometry, the draw
//! stream, the text-grid renderer and the `tokio` frame loop.

pub mod core;
pub mod runtime;
pub mod time;

pub mod coords;
pub mod logging;
pub mod render;
pub mod scene;
