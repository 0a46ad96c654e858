//! Scene (draw stream) types.
//!
//! Widgets record renderer-agnostic commands into a [`DrawList`]; a renderer
//! (see `render::TextGrid`) consumes them in paint order.

mod cmd;
mod key;
mod list;

pub use cmd::{DrawCmd, TextCmd};
pub use key::{SortKey, ZIndex};
pub use list::{DrawItem, DrawList};
