//! Clickable regions recorded during the last draw.
//!
//! Components push a `(Rect, HitTarget)` pair for everything the mouse can
//! activate. Later pushes sit on top, so a tag badge wins over the card
//! that contains it.

use ratatui::layout::{Position, Rect};

use crate::core::navigation::Section;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Section(Section),
    SearchBox,
    /// Index into the current filtered result.
    Card(usize),
    Tag(String),
    ResetSearch,
}

#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the given screen cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
