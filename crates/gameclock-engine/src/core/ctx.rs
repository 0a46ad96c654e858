use anyhow::Result;

use crate::runtime::{RuntimeCtx, Surface};
use crate::scene::DrawList;
use crate::time::FrameTime;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
pub struct FrameCtx<'a> {
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
    pub(crate) surface: &'a mut Surface,
}

impl FrameCtx<'_> {
    /// Rasterizes `list` and writes it out if it differs from the last
    /// presented frame. Returns whether anything was written.
    pub fn present(&mut self, list: &mut DrawList) -> Result<bool> {
        self.surface.present(list)
    }
}
