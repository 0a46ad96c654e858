use gameclock_engine::coords::{Rect, Vec2};
use gameclock_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`; every call lands on the next z layer so
/// paint order follows call order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Width of `text` in cells (one per `char`).
    pub fn measure_text(text: &str) -> Vec2 {
        let w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        Vec2::new(w, 1)
    }

    /// Single-line text at the top-left of `rect`, truncated to its width.
    pub fn text(&mut self, text: impl Into<String>, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_text(z, text, rect.origin, Some(rect.size.x));
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
