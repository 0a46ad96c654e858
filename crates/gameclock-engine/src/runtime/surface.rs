use std::io::Write;

use anyhow::{Context, Result};

use crate::coords::Vec2;
use crate::render::TextGrid;
use crate::scene::DrawList;

/// ANSI "cursor home, clear screen".
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Text output target for presented frames.
///
/// Keeps the last presented text so unchanged frames are not rewritten.
pub struct Surface {
    grid: TextGrid,
    last: Option<String>,
    clear_between_frames: bool,
    presented: u64,
    out: Box<dyn Write>,
}

impl Surface {
    pub fn new(size: Vec2, clear_between_frames: bool, out: Box<dyn Write>) -> Self {
        Self {
            grid: TextGrid::new(size),
            last: None,
            clear_between_frames,
            presented: 0,
            out,
        }
    }

    /// Number of frames actually written.
    #[inline]
    pub fn presented(&self) -> u64 {
        self.presented
    }

    pub(crate) fn present(&mut self, list: &mut DrawList) -> Result<bool> {
        self.grid.render(list);
        let text = self.grid.to_text();
        if self.last.as_deref() == Some(text.as_str()) {
            return Ok(false);
        }

        if self.clear_between_frames {
            writeln!(self.out, "{CLEAR_SCREEN}{text}").context("failed to write frame")?;
        } else {
            writeln!(self.out, "{text}\n").context("failed to write frame")?;
        }
        self.out.flush().context("failed to flush frame")?;

        self.presented += 1;
        self.last = Some(text);
        Ok(true)
    }
}
