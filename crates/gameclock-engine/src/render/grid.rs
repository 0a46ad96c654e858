use crate::coords::{Rect, Vec2};
use crate::scene::{DrawCmd, DrawList};

/// Fixed-size character grid.
///
/// Text commands are written cell by cell in paint order, so later items
/// overwrite earlier ones. Anything outside the grid (or past a command's
/// `max_width`) is clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextGrid {
    size: Vec2,
    cells: Vec<char>,
}

impl TextGrid {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            cells: vec![' '; usize::from(size.x) * usize::from(size.y)],
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Blanks every cell.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Clears the grid and rasterizes `list` into it.
    pub fn render(&mut self, list: &mut DrawList) {
        self.clear();
        let bounds = Rect::from_origin_size(Vec2::zero(), self.size);
        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Text(cmd) => {
                    let limit = cmd.max_width.unwrap_or(u16::MAX);
                    for (i, ch) in cmd.text.chars().take(usize::from(limit)).enumerate() {
                        let Ok(dx) = u16::try_from(i) else { break };
                        let pos = Vec2::new(cmd.origin.x.saturating_add(dx), cmd.origin.y);
                        if !bounds.contains(pos) {
                            break;
                        }
                        let idx = usize::from(pos.y) * usize::from(self.size.x) + usize::from(pos.x);
                        self.cells[idx] = ch;
                    }
                }
            }
        }
    }

    /// Grid rows with trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        if self.size.x == 0 {
            return vec![String::new(); usize::from(self.size.y)];
        }
        self.cells
            .chunks(usize::from(self.size.x))
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }

    /// Rows joined with `\n`, trailing empty rows dropped.
    pub fn to_text(&self) -> String {
        let mut lines = self.lines();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ZIndex;

    fn render(size: Vec2, fill: impl FnOnce(&mut DrawList)) -> TextGrid {
        let mut list = DrawList::new();
        fill(&mut list);
        let mut grid = TextGrid::new(size);
        grid.render(&mut list);
        grid
    }

    #[test]
    fn places_text_at_origin() {
        let grid = render(Vec2::new(10, 2), |l| {
            l.push_text(ZIndex::default(), "5:00", Vec2::new(3, 1), None);
        });
        assert_eq!(grid.lines(), vec!["".to_string(), "   5:00".to_string()]);
    }

    #[test]
    fn clips_at_grid_edge() {
        let grid = render(Vec2::new(4, 1), |l| {
            l.push_text(ZIndex::default(), "overflow", Vec2::new(1, 0), None);
        });
        assert_eq!(grid.to_text(), " ove");
    }

    #[test]
    fn clips_at_max_width() {
        let grid = render(Vec2::new(10, 1), |l| {
            l.push_text(ZIndex::default(), "Magnus", Vec2::zero(), Some(3));
        });
        assert_eq!(grid.to_text(), "Mag");
    }

    #[test]
    fn higher_z_overwrites() {
        let grid = render(Vec2::new(6, 1), |l| {
            l.push_text(ZIndex::new(1), "XY", Vec2::new(1, 0), None);
            l.push_text(ZIndex::new(0), "abcd", Vec2::zero(), None);
        });
        assert_eq!(grid.to_text(), "aXYd");
    }

    #[test]
    fn rows_outside_grid_are_dropped() {
        let grid = render(Vec2::new(5, 1), |l| {
            l.push_text(ZIndex::default(), "hidden", Vec2::new(0, 3), None);
        });
        assert_eq!(grid.to_text(), "");
    }
}
