//! Coordinate and geometry types shared by the renderer and the UI layer.
//!
//! Canonical space is the terminal character grid:
//! - one unit = one character cell
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
