use gameclock_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// A single line of text, truncated to the width its parent allows.
///
/// # Example
/// ```rust,ignore
/// Text::new("4:59")
/// ```
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(Painter::measure_text(&self.text))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.text(self.text.as_str(), rect);
    }
}
