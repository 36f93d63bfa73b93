//! # CardGrid Component
//!
//! Responsive, scrollable grid of `VideoCard`s for the current filtered
//! result.
//!
//! ## Responsibilities
//!
//! - Pick a column count from the terminal width (1 / 2 / 3)
//! - Lay cards out in rows; a row is as tall as its tallest card
//! - Keyboard selection of a card and of a tag within it
//! - Scrolling (mouse wheel, PageUp/PageDown, follow the selection)
//! - Record card and badge hit regions for mouse clicks
//!
//! ## Architecture
//!
//! `CardGrid` is a transient component (created each frame) that wraps
//! `&'a mut CardGridState` (persistent state) plus the cards to show.
//! Row geometry is cached in the state during render so keyboard
//! navigation between frames can scroll without re-measuring.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::VideoRecord;
use crate::tui::component::Component;
use crate::tui::components::video_card::{CardLayout, VideoCard};
use crate::tui::event::TuiEvent;
use crate::tui::hit::{HitMap, HitTarget};

/// Blank columns between cards in a row.
const COLUMN_GAP: u16 = 1;

/// Column count for a grid `width` columns wide.
pub fn columns_for(width: u16, narrow_width: u16, wide_width: u16) -> usize {
    if width < narrow_width {
        1
    } else if width < wide_width {
        2
    } else {
        3
    }
}

/// Events emitted by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// Enter on a highlighted tag
    TagActivated(String),
}

/// Selection, scroll and geometry cache for the grid.
/// Must be persisted in the parent TuiState.
pub struct CardGridState {
    pub scroll_state: ScrollViewState,
    /// Index into the filtered result
    pub selected: usize,
    /// Index into the selected card's tags
    pub selected_tag: Option<usize>,
    /// Column count from the last render
    pub columns: usize,
    /// Content-space top of each row from the last render
    pub row_tops: Vec<u16>,
    pub row_heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            selected_tag: None,
            columns: 1,
            row_tops: Vec::new(),
            row_heights: Vec::new(),
            viewport_height: 0,
        }
    }

    /// Back to the first card at the top. Called whenever the result changes.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.selected_tag = None;
        self.scroll_state.scroll_to_top();
    }

    pub fn select(&mut self, index: usize) {
        if index != self.selected {
            self.selected_tag = None;
        }
        self.selected = index;
        self.scroll_to_selected();
    }

    fn clamp_selection(&mut self, count: usize) {
        if count == 0 {
            self.selected = 0;
            self.selected_tag = None;
        } else if self.selected >= count {
            self.selected = count - 1;
            self.selected_tag = None;
        }
    }

    fn total_height(&self) -> u16 {
        self.row_heights
            .iter()
            .fold(0u16, |total, &height| total.saturating_add(height))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: 0, y: max_y });
        }
    }

    /// Scroll the viewport so the selected card's row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let row = self.selected / self.columns.max(1);
        let (Some(&top), Some(&height)) = (self.row_tops.get(row), self.row_heights.get(row))
        else {
            return;
        };
        let bottom = top.saturating_add(height);
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y || height >= self.viewport_height {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport_height) {
            let new_y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Handle a key or scroll event against the cards currently shown.
    pub fn handle_event(&mut self, event: &TuiEvent, cards: &[&VideoRecord]) -> Option<GridEvent> {
        let count = cards.len();
        let columns = self.columns.max(1);
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ if count == 0 => None,
            TuiEvent::CursorLeft => {
                if self.selected > 0 {
                    self.select(self.selected - 1);
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.selected + 1 < count {
                    self.select(self.selected + 1);
                }
                None
            }
            TuiEvent::CursorUp => {
                if self.selected >= columns {
                    self.select(self.selected - columns);
                }
                None
            }
            TuiEvent::CursorDown => {
                let last_row = (count - 1) / columns;
                if self.selected / columns < last_row {
                    self.select((self.selected + columns).min(count - 1));
                }
                None
            }
            TuiEvent::CursorHome => {
                self.select(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.select(count - 1);
                None
            }
            // Space cycles the highlighted tag of the selected card
            TuiEvent::InputChar(' ') => {
                let tags = cards.get(self.selected).map_or(0, |c| c.tags.len());
                self.selected_tag = match self.selected_tag {
                    _ if tags == 0 => None,
                    None => Some(0),
                    Some(i) => Some((i + 1) % tags),
                };
                None
            }
            // Enter activates the highlighted tag, or highlights the first one
            TuiEvent::Submit => {
                let card = cards.get(self.selected)?;
                match self.selected_tag {
                    Some(i) => card.tags.get(i).cloned().map(GridEvent::TagActivated),
                    None => {
                        if !card.tags.is_empty() {
                            self.selected_tag = Some(0);
                        }
                        None
                    }
                }
            }
            _ => None,
        }
    }
}

/// Map a content-space rect into the visible screen area, clipped.
fn to_screen(content: Rect, area: Rect, offset_y: u16) -> Option<Rect> {
    let top = i32::from(area.y) + i32::from(content.y) - i32::from(offset_y);
    let bottom = top + i32::from(content.height);
    let visible_top = top.max(i32::from(area.y));
    let visible_bottom = bottom.min(i32::from(area.y) + i32::from(area.height));
    if visible_bottom <= visible_top {
        return None;
    }
    Some(Rect::new(
        area.x + content.x,
        u16::try_from(visible_top).ok()?,
        content.width,
        u16::try_from(visible_bottom - visible_top).ok()?,
    ))
}

/// Scrollable card grid.
/// Created fresh each frame with references to state and data.
pub struct CardGrid<'a> {
    pub state: &'a mut CardGridState,
    pub cards: &'a [&'a VideoRecord],
    pub hits: &'a mut HitMap,
    pub focused: bool,
    pub narrow_width: u16,
    pub wide_width: u16,
}

impl<'a> CardGrid<'a> {
    pub fn new(
        state: &'a mut CardGridState,
        cards: &'a [&'a VideoRecord],
        hits: &'a mut HitMap,
        focused: bool,
        narrow_width: u16,
        wide_width: u16,
    ) -> Self {
        Self {
            state,
            cards,
            hits,
            focused,
            narrow_width,
            wide_width,
        }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = columns_for(area.width, self.narrow_width, self.wide_width);
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let gaps = COLUMN_GAP * (columns as u16 - 1);
        let card_width = content_width.saturating_sub(gaps) / columns as u16;

        self.state.columns = columns;
        self.state.clamp_selection(self.cards.len());

        // 1. Measure every card and cache row geometry
        let layouts: Vec<CardLayout> = self
            .cards
            .iter()
            .map(|card| CardLayout::compute(card, card_width))
            .collect();

        self.state.row_tops.clear();
        self.state.row_heights.clear();
        let mut top = 0u16;
        for row in layouts.chunks(columns) {
            let height = row.iter().map(|l| l.height).max().unwrap_or(0);
            self.state.row_tops.push(top);
            self.state.row_heights.push(height);
            top = top.saturating_add(height);
        }
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();
        let offset_y = self.state.scroll_state.offset().y;

        // 2. Draw into the scroll view and record hit regions
        let mut scroll_view = ScrollView::new(Size::new(content_width, top))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, (card, layout)) in self.cards.iter().zip(&layouts).enumerate() {
            let row = index / columns;
            let col = (index % columns) as u16;
            let card_rect = Rect::new(
                col * (card_width + COLUMN_GAP),
                self.state.row_tops[row],
                card_width,
                layout.height,
            );
            // Only cards in the viewport are drawn
            let Some(screen) = to_screen(card_rect, area, offset_y) else {
                continue;
            };

            let is_selected = self.focused && index == self.state.selected;
            let tag = if is_selected { self.state.selected_tag } else { None };
            scroll_view.render_widget(
                VideoCard::new(card, layout).selected(is_selected, tag),
                card_rect,
            );

            self.hits.push(screen, HitTarget::Card(index));
            for badge in &layout.badges {
                let badge_rect = layout.badge_rect(badge, card_rect);
                if let Some(screen) = to_screen(badge_rect, area, offset_y) {
                    self.hits
                        .push(screen, HitTarget::Tag(card.tags[badge.tag_index].clone()));
                }
            }
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(
        state: &mut CardGridState,
        cards: &[&VideoRecord],
        hits: &mut HitMap,
        width: u16,
        height: u16,
    ) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CardGrid::new(state, cards, hits, true, 60, 100).render(f, area);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_columns_for_breakpoints() {
        assert_eq!(columns_for(40, 60, 100), 1);
        assert_eq!(columns_for(60, 60, 100), 2);
        assert_eq!(columns_for(99, 60, 100), 2);
        assert_eq!(columns_for(100, 60, 100), 3);
    }

    #[test]
    fn test_render_three_columns_caches_rows() {
        let catalog = Catalog::sample();
        let cards: Vec<&VideoRecord> = catalog.records().iter().collect();
        let mut state = CardGridState::new();
        let mut hits = HitMap::new();

        let terminal = draw(&mut state, &cards, &mut hits, 120, 40);

        assert_eq!(state.columns, 3);
        assert_eq!(state.row_tops.len(), 2);
        assert!(buffer_text(&terminal).contains("12:34"));
    }

    #[test]
    fn test_badge_hits_recorded() {
        let catalog = Catalog::sample();
        let cards: Vec<&VideoRecord> = catalog.records().iter().take(1).collect();
        let mut state = CardGridState::new();
        let mut hits = HitMap::new();

        draw(&mut state, &cards, &mut hits, 50, 20);

        // Card 0 in a single column: badge row sits below title/description/meta
        let card = CardLayout::compute(cards[0], 49);
        let first = &card.badges[0];
        let rect = card.badge_rect(first, Rect::new(0, 0, 49, card.height));
        assert_eq!(
            hits.target_at(rect.x, rect.y),
            Some(&HitTarget::Tag("космос".to_string()))
        );
        assert_eq!(hits.target_at(2, 1), Some(&HitTarget::Card(0)));
    }

    #[test]
    fn test_keyboard_navigation_in_two_columns() {
        let catalog = Catalog::sample();
        let cards: Vec<&VideoRecord> = catalog.records().iter().collect();
        let mut state = CardGridState::new();
        state.columns = 2;

        state.handle_event(&TuiEvent::CursorDown, &cards);
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::CursorRight, &cards);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorUp, &cards);
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorEnd, &cards);
        assert_eq!(state.selected, 5);
        state.handle_event(&TuiEvent::CursorDown, &cards);
        assert_eq!(state.selected, 5);
    }

    #[test]
    fn test_space_cycles_tags_and_enter_activates() {
        let catalog = Catalog::sample();
        let cards: Vec<&VideoRecord> = catalog.records().iter().collect();
        let mut state = CardGridState::new();

        // First Enter only highlights
        assert_eq!(state.handle_event(&TuiEvent::Submit, &cards), None);
        assert_eq!(state.selected_tag, Some(0));

        state.handle_event(&TuiEvent::InputChar(' '), &cards);
        assert_eq!(state.selected_tag, Some(1));
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &cards),
            Some(GridEvent::TagActivated("природа".to_string()))
        );

        // Wraps after the last tag
        state.handle_event(&TuiEvent::InputChar(' '), &cards);
        state.handle_event(&TuiEvent::InputChar(' '), &cards);
        assert_eq!(state.selected_tag, Some(0));
    }

    #[test]
    fn test_moving_clears_tag_highlight() {
        let catalog = Catalog::sample();
        let cards: Vec<&VideoRecord> = catalog.records().iter().collect();
        let mut state = CardGridState::new();
        state.selected_tag = Some(2);
        state.handle_event(&TuiEvent::CursorRight, &cards);
        assert_eq!(state.selected_tag, None);
    }

    #[test]
    fn test_empty_grid_ignores_navigation() {
        let mut state = CardGridState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &[]), None);
        state.handle_event(&TuiEvent::CursorDown, &[]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selection_clamped_when_result_shrinks() {
        let catalog = Catalog::sample();
        let cards: Vec<&VideoRecord> = catalog.records().iter().take(2).collect();
        let mut state = CardGridState::new();
        state.selected = 5;
        let mut hits = HitMap::new();
        draw(&mut state, &cards, &mut hits, 50, 20);
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_huge_catalog_renders_and_scrolls_to_end() {
        let records: Vec<VideoRecord> = (0..10_000)
            .map(|i| VideoRecord {
                id: i.to_string(),
                title: format!("Видео {i}"),
                description: "Описание".to_string(),
                thumbnail_url: String::new(),
                duration: "1:00".to_string(),
                view_count: "1K".to_string(),
                uploaded_label: "вчера".to_string(),
                tags: vec!["тег".to_string()],
            })
            .collect();
        let catalog = Catalog::new(records).unwrap();
        let cards: Vec<&VideoRecord> = catalog.records().iter().collect();
        let mut state = CardGridState::new();
        let mut hits = HitMap::new();

        let terminal = draw(&mut state, &cards, &mut hits, 50, 20);
        assert_eq!(state.row_tops.len(), 10_000);
        assert_eq!(*state.row_tops.last().unwrap(), u16::MAX);
        assert!(buffer_text(&terminal).contains("Видео 0"));

        state.handle_event(&TuiEvent::CursorEnd, &cards);
        state.handle_event(&TuiEvent::ScrollPageDown, &cards);
        draw(&mut state, &cards, &mut hits, 50, 20);
        assert_eq!(state.scroll_state.offset().y, u16::MAX - 20);
    }

    #[test]
    fn test_to_screen_clips_partially_visible() {
        let area = Rect::new(0, 5, 40, 10);
        // Card spans content rows 8..14, viewport shows 10..20
        let rect = to_screen(Rect::new(0, 8, 20, 6), area, 10).unwrap();
        assert_eq!(rect, Rect::new(0, 5, 20, 4));
        // Entirely above the viewport
        assert_eq!(to_screen(Rect::new(0, 0, 20, 5), area, 10), None);
    }
}
