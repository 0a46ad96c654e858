//! Renderers consuming a [`DrawList`](crate::scene::DrawList).
//!
//! There is a single backend: a character grid suitable for a terminal.

mod grid;

pub use grid::TextGrid;
