use crate::coords::Vec2;

/// Renderer-agnostic draw command.
///
/// The clock only ever draws text; styling is left to whatever consumes the
/// stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Text(TextCmd),
}

/// Single-line text payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCmd {
    pub text: String,
    /// Cell of the first character.
    pub origin: Vec2,
    /// Truncation width in cells. `None` = run to the edge of the target.
    pub max_width: Option<u16>,
}
