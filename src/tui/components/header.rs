//! # Header and Navigation Components
//!
//! `Header` is the single top row: brand on the left, section tabs in the
//! middle, status text and a bell on the right. On narrow terminals the
//! tabs are hidden (`show_tabs = false`) and `BottomNav` draws them as a
//! two-row bar at the bottom of the screen instead.
//!
//! Both record a hit region per tab so a mouse click selects the section.
//!
//! ```text
//! ▶ VideoHub  ⌂ Главная  ▦ Каталог  ≡ Плейлисты  ↺ История  ◉ Профиль   Тег: web 🔔
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::navigation::Section;
use crate::tui::component::Component;
use crate::tui::components::text::{display_width, truncate_to_width};
use crate::tui::hit::{HitMap, HitTarget};

pub const BRAND: &str = "▶ VideoHub";
const BELL: &str = "🔔";

fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Top bar with brand, tabs and status.
pub struct Header<'a> {
    pub section: Section,
    pub status_message: &'a str,
    pub show_tabs: bool,
    pub hits: &'a mut HitMap,
}

impl<'a> Header<'a> {
    pub fn new(section: Section, status_message: &'a str, show_tabs: bool, hits: &'a mut HitMap) -> Self {
        Self {
            section,
            status_message,
            show_tabs,
            hits,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let brand_width = display_width(BRAND) + 2;
        let status = if self.status_message.is_empty() {
            BELL.to_string()
        } else {
            format!("{}  {}", self.status_message, BELL)
        };
        let status_width = display_width(&status).min(area.width / 3);

        let [brand_area, tabs_area, status_area] = Layout::horizontal([
            Constraint::Length(brand_width),
            Constraint::Min(0),
            Constraint::Length(status_width),
        ])
        .areas(area);

        frame.render_widget(
            Span::styled(
                BRAND,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            brand_area,
        );

        if self.show_tabs {
            let mut spans = Vec::new();
            let mut x = tabs_area.x;
            let right = tabs_area.x + tabs_area.width;
            for section in Section::ALL {
                let label = format!(" {} {} ", section.icon(), section.label());
                let width = display_width(&label);
                if x + width > right {
                    break;
                }
                self.hits
                    .push(Rect::new(x, tabs_area.y, width, 1), HitTarget::Section(section));
                spans.push(Span::styled(label, tab_style(section == self.section)));
                spans.push(Span::raw(" "));
                x += width + 1;
            }
            frame.render_widget(Line::from(spans), tabs_area);
        }

        let status_text = truncate_to_width(&status, usize::from(status_area.width));
        frame.render_widget(
            Paragraph::new(status_text)
                .style(Style::default().fg(Color::DarkGray))
                .right_aligned(),
            status_area,
        );
    }
}

/// Two-row bottom navigation for narrow terminals: icon over label.
pub struct BottomNav<'a> {
    pub section: Section,
    pub hits: &'a mut HitMap,
}

impl<'a> BottomNav<'a> {
    pub fn new(section: Section, hits: &'a mut HitMap) -> Self {
        Self { section, hits }
    }

    pub const HEIGHT: u16 = 2;
}

impl Component for BottomNav<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let slots = Layout::horizontal([Constraint::Ratio(1, Section::ALL.len() as u32); 5])
            .split(area);

        for (section, slot) in Section::ALL.into_iter().zip(slots.iter()) {
            let active = section == self.section;
            let style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let label = truncate_to_width(section.label(), usize::from(slot.width));
            let lines = vec![
                Line::styled(section.icon(), style).centered(),
                Line::styled(label, style).centered(),
            ];
            frame.render_widget(Paragraph::new(lines), *slot);
            self.hits.push(*slot, HitTarget::Section(section));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_header_shows_brand_tabs_and_status() {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        let mut hits = HitMap::new();

        terminal
            .draw(|f| {
                let area = f.area();
                Header::new(Section::Catalog, "Тег: web", true, &mut hits).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("VideoHub"));
        assert!(text.contains("Главная"));
        assert!(text.contains("Профиль"));
        assert!(text.contains("Тег: web"));
        assert_eq!(hits.len(), 5);
    }

    #[test]
    fn test_header_tab_hit_regions() {
        let mut terminal = Terminal::new(TestBackend::new(120, 1)).unwrap();
        let mut hits = HitMap::new();

        terminal
            .draw(|f| {
                let area = f.area();
                Header::new(Section::Home, "", true, &mut hits).render(f, area);
            })
            .unwrap();

        // Brand takes 12 columns, first tab starts right after
        assert_eq!(hits.target_at(13, 0), Some(&HitTarget::Section(Section::Home)));
        assert_eq!(hits.target_at(0, 0), None);
    }

    #[test]
    fn test_header_without_tabs() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let mut hits = HitMap::new();

        terminal
            .draw(|f| {
                let area = f.area();
                Header::new(Section::Home, "", false, &mut hits).render(f, area);
            })
            .unwrap();

        assert!(!buffer_text(&terminal).contains("Главная"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_bottom_nav_slots() {
        let mut terminal = Terminal::new(TestBackend::new(50, BottomNav::HEIGHT)).unwrap();
        let mut hits = HitMap::new();

        terminal
            .draw(|f| {
                let area = f.area();
                BottomNav::new(Section::History, &mut hits).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("История"));
        assert_eq!(hits.target_at(0, 1), Some(&HitTarget::Section(Section::Home)));
        assert_eq!(hits.target_at(49, 0), Some(&HitTarget::Section(Section::Profile)));
    }
}
