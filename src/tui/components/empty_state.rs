//! # Empty State Component
//!
//! Shown in place of the grid when a non-empty query matched nothing.
//! The reset button records a hit region; clicking it clears the search.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::text::display_width;
use crate::tui::hit::{HitMap, HitTarget};

pub const HEADLINE: &str = "Ничего не найдено";
pub const HINT: &str = "Попробуйте изменить запрос или очистить фильтры";
pub const RESET_BUTTON: &str = "[ Сбросить поиск ]";

pub struct EmptyState<'a> {
    pub hits: &'a mut HitMap,
}

impl<'a> EmptyState<'a> {
    pub fn new(hits: &'a mut HitMap) -> Self {
        Self { hits }
    }
}

impl Component for EmptyState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [icon_area, headline_area, hint_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        frame.render_widget(
            Line::styled("⌕ ✕", Style::default().fg(Color::DarkGray)).centered(),
            icon_area,
        );
        frame.render_widget(
            Line::styled(HEADLINE, Style::default().add_modifier(Modifier::BOLD)).centered(),
            headline_area,
        );
        frame.render_widget(
            Paragraph::new(HINT)
                .style(Style::default().fg(Color::DarkGray))
                .centered(),
            hint_area,
        );

        let [button] = Layout::horizontal([Constraint::Length(display_width(RESET_BUTTON))])
            .flex(Flex::Center)
            .areas(button_area);
        frame.render_widget(
            Line::styled(
                RESET_BUTTON,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            button,
        );
        self.hits.push(button, HitTarget::ResetSearch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_text_and_records_button() {
        let mut terminal = Terminal::new(TestBackend::new(60, 11)).unwrap();
        let mut hits = HitMap::new();

        terminal
            .draw(|f| {
                let area = f.area();
                EmptyState::new(&mut hits).render(f, area);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains(HEADLINE));
        assert!(text.contains(HINT));
        assert!(text.contains(RESET_BUTTON));

        // Five rows centered in eleven: button on row 7, centered horizontally
        assert_eq!(hits.target_at(30, 7), Some(&HitTarget::ResetSearch));
        assert_eq!(hits.target_at(30, 6), None);
    }
}
