//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until input arrives (or a 250ms
//! tick passes), drains every pending event, applies them in order, then
//! redraws once. Each action is applied fully before the next is read.
//!
//! ## Focus
//!
//! Keyboard input goes either to the search box or to the card grid
//! (`Tab` toggles). Typing while the grid is focused jumps back to search.

pub mod component;
pub mod components;
pub mod event;
pub mod hit;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::{DEFAULT_NARROW_WIDTH, DEFAULT_WIDE_WIDTH, ResolvedConfig};
use crate::core::navigation::Section;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardGridState, GridEvent, SearchBox, SearchEvent};
use crate::tui::hit::{HitMap, HitTarget};

pub use crate::tui::event::TuiEvent;

/// Which component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the query.
    Search,
    /// Arrows move between cards, Space/Enter pick tags.
    Grid,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_box: SearchBox,
    pub grid: CardGridState,
    pub focus: Focus,
    // Clickable regions from the last frame
    pub hits: HitMap,
    // Responsive breakpoints
    pub narrow_width: u16,
    pub wide_width: u16,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(DEFAULT_NARROW_WIDTH, DEFAULT_WIDE_WIDTH)
    }
}

impl TuiState {
    pub fn new(narrow_width: u16, wide_width: u16) -> Self {
        Self {
            search_box: SearchBox::new(),
            grid: CardGridState::new(),
            focus: Focus::Search, // User expects to type immediately
            hits: HitMap::new(),
            narrow_width,
            wide_width,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBar,
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Apply an action and bring presentation state in line with the new query.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let resets_grid = matches!(
        action,
        Action::QueryChanged(_) | Action::TagClicked(_) | Action::ResetSearch
    );
    let effect = update(app, action);
    if resets_grid {
        tui.grid.reset();
        // Tag clicks and resets replace the query wholesale; mirror it in the editor
        tui.search_box.set_text(app.query());
    }
    effect
}

/// Route one input event to the right component and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Resize => Effect::None,
        TuiEvent::ForceQuit => apply(app, tui, Action::Quit),
        TuiEvent::ResetSearch => apply(app, tui, Action::ResetSearch),
        TuiEvent::SelectSection(index) => match Section::from_index(index) {
            Some(section) => apply(app, tui, Action::NavigationSelected(section)),
            None => Effect::None,
        },
        TuiEvent::NextSection => {
            let next = app.navigation_selection().next();
            apply(app, tui, Action::NavigationSelected(next))
        }
        TuiEvent::PrevSection => {
            let prev = app.navigation_selection().prev();
            apply(app, tui, Action::NavigationSelected(prev))
        }
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = match tui.focus {
                Focus::Search => Focus::Grid,
                Focus::Grid => Focus::Search,
            };
            Effect::None
        }
        TuiEvent::MouseClick(column, row) => handle_click(app, tui, column, row),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            let cards = app.filtered_result();
            tui.grid.handle_event(&event, &cards);
            Effect::None
        }
        _ => match tui.focus {
            Focus::Search => handle_search_key(app, tui, event),
            Focus::Grid => handle_grid_key(app, tui, event),
        },
    }
}

fn handle_search_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Esc clears a non-empty search, quits from an empty one
        TuiEvent::Escape if !tui.search_box.buffer.is_empty() => {
            apply(app, tui, Action::ResetSearch)
        }
        TuiEvent::Escape => apply(app, tui, Action::Quit),
        TuiEvent::CursorDown => {
            if app.result_count() > 0 {
                tui.focus = Focus::Grid;
            }
            Effect::None
        }
        _ => match tui.search_box.handle_event(&event) {
            Some(SearchEvent::Changed(text)) => apply(app, tui, Action::QueryChanged(text)),
            Some(SearchEvent::Submit) => {
                if app.result_count() > 0 {
                    tui.focus = Focus::Grid;
                }
                Effect::None
            }
            None => Effect::None,
        },
    }
}

fn handle_grid_key(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape => {
            tui.focus = Focus::Search;
            Effect::None
        }
        // Typing auto-switches to search and forwards the event
        TuiEvent::InputChar(c) if c != ' ' => {
            tui.focus = Focus::Search;
            handle_search_key(app, tui, event)
        }
        TuiEvent::Paste(_) | TuiEvent::Backspace => {
            tui.focus = Focus::Search;
            handle_search_key(app, tui, event)
        }
        _ => {
            let grid_event = {
                let cards = app.filtered_result();
                tui.grid.handle_event(&event, &cards)
            };
            match grid_event {
                Some(GridEvent::TagActivated(tag)) => apply(app, tui, Action::TagClicked(tag)),
                None => Effect::None,
            }
        }
    }
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    let Some(target) = tui.hits.target_at(column, row).cloned() else {
        return Effect::None;
    };
    debug!("Click at ({}, {}) hit {:?}", column, row, target);
    match target {
        HitTarget::Section(section) => apply(app, tui, Action::NavigationSelected(section)),
        HitTarget::Tag(tag) => apply(app, tui, Action::TagClicked(tag)),
        HitTarget::ResetSearch => apply(app, tui, Action::ResetSearch),
        HitTarget::SearchBox => {
            tui.focus = Focus::Search;
            Effect::None
        }
        HitTarget::Card(index) => {
            tui.focus = Focus::Grid;
            tui.grid.select(index);
            Effect::None
        }
    }
}

pub fn run(mut app: App, config: &ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.narrow_width, config.wide_width);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = event::poll_event_timeout(Duration::from_millis(250))?;
        if first_event.is_none() {
            continue;
        }
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(event) = pending {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
            pending = event::poll_event_immediate()?;
        }

        if should_quit {
            break;
        }
    }

    info!("VideoHub shutting down");
    ratatui::restore();
    Ok(())
}
