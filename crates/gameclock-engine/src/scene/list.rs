use crate::coords::Vec2;

use super::{DrawCmd, SortKey, TextCmd, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration sorts lazily and reuses its index
/// buffer across frames.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        origin: Vec2,
        max_width: Option<u16>,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), origin, max_width }));
    }

    /// Iterates items in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// All text payloads in paint order. Handy for assertions and logging.
    pub fn texts(&mut self) -> Vec<&str> {
        self.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Text(t) => t.text.as_str(),
            })
            .collect()
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices.sort_by_key(|&i| self.items[i].key);
        self.sorted_dirty = false;
    }
}
