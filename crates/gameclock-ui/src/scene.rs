use gameclock_engine::coords::{Rect, Vec2};
use gameclock_engine::render::TextGrid;
use gameclock_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Top-level coordinator that owns the per-frame draw list.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// // In your on_frame callback:
/// let draw_list = ui.frame(&clock, Vec2::new(48, 6));
/// ctx.present(draw_list)?;
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Layout and paint `root` into a fresh draw list for this frame.
    ///
    /// The returned list is owned by the scene and valid until the next call.
    pub fn frame<W: Widget + ?Sized>(&mut self, root: &W, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();

        // Pre-pass so the root reports its natural size; it still occupies
        // the full viewport.
        let _ = root.measure(Constraints::loose(viewport));
        let rect = Rect::from_origin_size(Vec2::zero(), viewport);

        let mut painter = Painter::new(&mut self.draw_list);
        root.paint(&mut painter, rect);

        &mut self.draw_list
    }

    /// Paints `root` and rasterizes it to text in one go.
    pub fn render_text<W: Widget + ?Sized>(&mut self, root: &W, viewport: Vec2) -> String {
        let mut grid = TextGrid::new(viewport);
        grid.render(self.frame(root, viewport));
        grid.to_text()
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
