//! # VideoCard Component
//!
//! One catalog entry as a bordered card:
//!
//! ```text
//! ╭──────────────────────────────╮
//! │ ▶                      12:34 │  thumbnail band + duration
//! │ Космические пейзажи в 4K     │  title, up to 2 lines
//! │ Путешествие по галактикам и  │  description, up to 2 lines
//! │ звездным системам            │
//! │ ◎ 1.2M · 2 дня назад         │  views + upload label
//! │ #космос #природа #4k         │  tag badges (wrap to more rows)
//! ╰──────────────────────────────╯
//! ```
//!
//! Layout is computed up front by `CardLayout::compute` so the grid can
//! size rows and record badge hit regions without rendering.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::core::catalog::VideoRecord;
use crate::tui::components::text::{clamp_lines, display_width, truncate_to_width};

const MAX_TITLE_LINES: usize = 2;
const MAX_DESCRIPTION_LINES: usize = 2;
/// Top and bottom border rows.
const BORDER_ROWS: u16 = 2;
/// Thumbnail band + meta line.
const FIXED_ROWS: u16 = 2;

/// A tag badge positioned relative to the card's inner area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSlot {
    /// Index into `record.tags`.
    pub tag_index: usize,
    pub label: String,
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub title: Vec<String>,
    pub description: Vec<String>,
    pub badges: Vec<BadgeSlot>,
    pub badge_rows: u16,
    /// Total height including borders.
    pub height: u16,
}

impl CardLayout {
    pub fn compute(record: &VideoRecord, width: u16) -> Self {
        let inner = width.saturating_sub(2);
        let title = clamp_lines(&record.title, inner, MAX_TITLE_LINES);
        let description = clamp_lines(&record.description, inner, MAX_DESCRIPTION_LINES);

        // Flow badges left to right, wrapping when a row is full
        let mut badges = Vec::with_capacity(record.tags.len());
        let (mut row, mut col) = (0u16, 0u16);
        for (tag_index, tag) in record.tags.iter().enumerate() {
            let label = truncate_to_width(&format!("#{tag}"), usize::from(inner));
            let width = display_width(&label);
            if col > 0 && col + width > inner {
                row += 1;
                col = 0;
            }
            badges.push(BadgeSlot {
                tag_index,
                label,
                row,
                col,
                width,
            });
            col += width + 1;
        }
        let badge_rows = if badges.is_empty() { 0 } else { row + 1 };

        let content_rows = FIXED_ROWS + title.len() as u16 + description.len() as u16 + badge_rows;
        Self {
            title,
            description,
            badges,
            badge_rows,
            height: BORDER_ROWS + content_rows,
        }
    }

    /// First badge row, relative to the card's inner area.
    pub fn badge_top(&self) -> u16 {
        1 + self.title.len() as u16 + self.description.len() as u16 + 1
    }

    /// Screen rect of a badge for a card drawn at `card_area`.
    pub fn badge_rect(&self, badge: &BadgeSlot, card_area: Rect) -> Rect {
        Rect::new(
            card_area.x + 1 + badge.col,
            card_area.y + 1 + self.badge_top() + badge.row,
            badge.width,
            1,
        )
    }
}

pub struct VideoCard<'a> {
    pub record: &'a VideoRecord,
    pub layout: &'a CardLayout,
    pub selected: bool,
    /// Tag highlighted for keyboard activation.
    pub selected_tag: Option<usize>,
}

impl<'a> VideoCard<'a> {
    pub fn new(record: &'a VideoRecord, layout: &'a CardLayout) -> Self {
        Self {
            record,
            layout,
            selected: false,
            selected_tag: None,
        }
    }

    pub fn selected(mut self, selected: bool, selected_tag: Option<usize>) -> Self {
        self.selected = selected;
        self.selected_tag = selected_tag;
        self
    }
}

impl Widget for VideoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        let put = |buf: &mut Buffer, y: &mut u16, line: Line| {
            if *y < bottom {
                buf.set_line(inner.x, *y, &line, inner.width);
                *y += 1;
            }
        };

        // Thumbnail band: play glyph left, duration right
        let band_style = Style::default().bg(Color::Rgb(30, 30, 46)).fg(Color::Gray);
        let duration = format!(" {} ", self.record.duration);
        let pad = usize::from(inner.width)
            .saturating_sub(2)
            .saturating_sub(display_width(&duration).into());
        put(
            buf,
            &mut y,
            Line::from(vec![
                Span::styled(" ▶", band_style.fg(Color::Red)),
                Span::styled(" ".repeat(pad), band_style),
                Span::styled(duration, band_style.add_modifier(Modifier::BOLD)),
            ]),
        );

        let title_style = if self.selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        for line in &self.layout.title {
            put(buf, &mut y, Line::styled(line.as_str(), title_style));
        }
        for line in &self.layout.description {
            put(
                buf,
                &mut y,
                Line::styled(line.as_str(), Style::default().fg(Color::Gray)),
            );
        }

        let meta = format!(
            "◎ {} · {}",
            self.record.view_count, self.record.uploaded_label
        );
        put(
            buf,
            &mut y,
            Line::styled(
                truncate_to_width(&meta, usize::from(inner.width)),
                Style::default().fg(Color::DarkGray),
            ),
        );

        for badge in &self.layout.badges {
            let row_y = y + badge.row;
            if row_y >= bottom {
                break;
            }
            let style = if self.selected && self.selected_tag == Some(badge.tag_index) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Magenta)
            };
            buf.set_stringn(
                inner.x + badge.col,
                row_y,
                &badge.label,
                usize::from(badge.width),
                style,
            );
        }
    }
}
