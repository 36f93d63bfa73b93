use crate::core::catalog::VideoRecord;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{BottomNav, CardGrid, EmptyState, Header};
use crate::tui::hit::HitTarget;
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Screen regions for one frame.
struct Areas {
    header: Rect,
    search: Rect,
    count: Rect,
    main: Rect,
    bottom_nav: Option<Rect>,
    footer: Option<Rect>,
}

fn split(area: Rect, query_active: bool, narrow: bool) -> Areas {
    use Constraint::{Length, Min};

    let count_height = if query_active { 1 } else { 0 };
    if narrow {
        let [header, search, count, main, nav] = Layout::vertical([
            Length(1),
            Length(3),
            Length(count_height),
            Min(0),
            Length(BottomNav::HEIGHT),
        ])
        .areas(area);
        Areas {
            header,
            search,
            count,
            main,
            bottom_nav: Some(nav),
            footer: None,
        }
    } else {
        let [header, search, count, main, footer] = Layout::vertical([
            Length(1),
            Length(3),
            Length(count_height),
            Min(0),
            Length(1),
        ])
        .areas(area);
        Areas {
            header,
            search,
            count,
            main,
            bottom_nav: None,
            footer: Some(footer),
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    tui.hits.clear();

    let narrow = frame.area().width < tui.narrow_width;
    let areas = split(frame.area(), !app.query().is_empty(), narrow);
    let section = app.navigation_selection();

    Header::new(section, &app.status_message, !narrow, &mut tui.hits).render(frame, areas.header);

    // Search box, centered and capped like a web search field
    let search_area = centered_width(areas.search, 80);
    tui.search_box.focused = tui.focus == Focus::Search;
    tui.search_box.render(frame, search_area);
    tui.hits.push(search_area, HitTarget::SearchBox);

    if !app.query().is_empty() {
        let count = format!("Найдено видео: {}", app.result_count());
        frame.render_widget(
            Line::styled(count, Style::default().fg(Color::DarkGray)).centered(),
            areas.count,
        );
    }

    let cards = app.filtered_result();
    if app.is_empty() {
        EmptyState::new(&mut tui.hits).render(frame, areas.main);
    } else {
        CardGrid::new(
            &mut tui.grid,
            &cards,
            &mut tui.hits,
            tui.focus == Focus::Grid,
            tui.narrow_width,
            tui.wide_width,
        )
        .render(frame, areas.main);
    }

    if let Some(nav) = areas.bottom_nav {
        BottomNav::new(section, &mut tui.hits).render(frame, nav);
    }
    if let Some(footer) = areas.footer {
        draw_footer(frame, footer, tui, &cards);
    }
}

/// Key hints, or the selected card's thumbnail URL while browsing the grid.
fn draw_footer(frame: &mut Frame, area: Rect, tui: &TuiState, cards: &[&VideoRecord]) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);

    let line = match (tui.focus, cards.get(tui.grid.selected)) {
        (Focus::Grid, Some(card)) => Line::from(vec![
            Span::styled(" ▣ ", key),
            Span::styled(card.thumbnail_url.as_str(), text),
        ]),
        _ => Line::from(vec![
            Span::styled(" Tab", key),
            Span::styled(" Фокус  ", text),
            Span::styled("F1-F5", key),
            Span::styled(" Разделы  ", text),
            Span::styled("Space/Enter", key),
            Span::styled(" Тег  ", text),
            Span::styled("Ctrl+R", key),
            Span::styled(" Сброс  ", text),
            Span::styled("Ctrl+C", key),
            Span::styled(" Выход", text),
        ]),
    };
    frame.render_widget(line, area);
}

/// A horizontally centered slice of `area` at most `max_width` wide.
fn centered_width(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
