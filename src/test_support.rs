//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::catalog::Catalog;
use crate::core::state::App;

/// Creates a test App over the built-in sample catalog.
pub fn test_app() -> App {
    App::new(Catalog::sample())
}

/// Ids of the current filtered result, in order.
pub fn result_ids(app: &App) -> Vec<String> {
    app.filtered_result().iter().map(|r| r.id.clone()).collect()
}

/// Flatten the rendered test buffer into one string.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
