use gameclock_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Shared state of `Column` and `Row`.
#[derive(Default)]
struct Flex {
    children: Vec<Element>,
    spacing: u16,
}

impl Flex {
    /// Total spacing between `n` children.
    fn gaps(&self) -> u16 {
        let n = u16::try_from(self.children.len()).unwrap_or(u16::MAX);
        self.spacing.saturating_mul(n.saturating_sub(1))
    }
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical flex container. Children are stacked top to bottom.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .spacing(1)
///     .child(Text::new("White"))
///     .child(Text::new("5:00"))
/// ```
#[derive(Default)]
pub struct Column(Flex);

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, v: u16) -> Self {
        self.0.spacing = v;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.0.children.push(child.into());
        self
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let child_c = Constraints::loose(constraints.max);
        let mut size = Vec2::new(0, self.0.gaps());
        for child in &self.0.children {
            let s = child.measure(child_c);
            size = Vec2::new(size.x.max(s.x), size.y.saturating_add(s.y));
        }
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let child_c = Constraints::loose(rect.size);

        let mut y = rect.origin.y;
        let bottom = rect.max().y;
        for child in &self.0.children {
            let s = child.measure(child_c);
            let h = s.y.min(bottom.saturating_sub(y));
            child.paint(painter, Rect::new(rect.origin.x, y, s.x, h));
            y = y.saturating_add(s.y).saturating_add(self.0.spacing);
        }
    }
}

// ── Row ───────────────────────────────────────────────────────────────────

/// Horizontal flex container. Children are placed left to right.
#[derive(Default)]
pub struct Row(Flex);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, v: u16) -> Self {
        self.0.spacing = v;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.0.children.push(child.into());
        self
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let child_c = Constraints::loose(constraints.max);
        let mut size = Vec2::new(self.0.gaps(), 0);
        for child in &self.0.children {
            let s = child.measure(child_c);
            size = Vec2::new(size.x.saturating_add(s.x), size.y.max(s.y));
        }
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let child_c = Constraints::loose(rect.size);

        let mut x = rect.origin.x;
        let right = rect.max().x;
        for child in &self.0.children {
            let s = child.measure(child_c);
            let w = s.x.min(right.saturating_sub(x));
            child.paint(painter, Rect::new(x, rect.origin.y, w, s.y));
            x = x.saturating_add(s.x).saturating_add(self.0.spacing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::UiScene;
    use crate::widgets::text::Text;

    #[test]
    fn column_measures_tallest_stack() {
        let col = Column::new().spacing(1).child(Text::new("abc")).child(Text::new("abcdef"));
        assert_eq!(col.measure(Constraints::unbounded()), Vec2::new(6, 3));
    }

    #[test]
    fn row_measure_sums_widths_and_gaps() {
        let row = Row::new().spacing(2).child(Text::new("ab")).child(Text::new("c"));
        assert_eq!(row.measure(Constraints::unbounded()), Vec2::new(5, 1));
    }

    #[test]
    fn row_of_columns_paints_side_by_side() {
        let root = Row::new()
            .spacing(3)
            .child(Column::new().child(Text::new("Ann")).child(Text::new("5:00")))
            .child(Column::new().child(Text::new("Bob")).child(Text::new("4:59")));
        let text = UiScene::new().render_text(&root, Vec2::new(20, 2));
        assert_eq!(text, "Ann    Bob\n5:00   4:59");
    }

    #[test]
    fn overflowing_row_is_truncated() {
        let root = Row::new().child(Text::new("abcdef")).child(Text::new("gh"));
        let text = UiScene::new().render_text(&root, Vec2::new(4, 1));
        assert_eq!(text, "abcd");
    }
}
