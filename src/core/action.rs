//! # Actions
//!
//! Everything that can happen in VideoHub becomes an `Action`.
//! User types in the search box? That's `Action::QueryChanged(text)`.
//! User clicks a tag badge? That's `Action::TagClicked(tag)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the event loop what to do next. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::navigation::Section;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    QueryChanged(String),
    TagClicked(String),
    NavigationSelected(Section),
    ResetSearch,
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::QueryChanged(text) => {
            app.set_query(text);
            app.status_message.clear();
        }
        Action::TagClicked(tag) => {
            app.status_message = format!("Тег: {}", tag);
            app.click_tag(&tag);
        }
        Action::NavigationSelected(section) => {
            app.set_navigation_selection(section);
        }
        Action::ResetSearch => {
            app.reset_search();
            app.status_message.clear();
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
