//! # Application State
//!
//! The view state controller. Owns the search query, the filtered result
//! derived from it, and the active navigation section. No TUI types here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog              // immutable video list
//! ├── query: String                 // as typed, untrimmed
//! ├── positions: Vec<usize>         // = filter_positions(catalog, query)
//! ├── section: Section              // header navigation
//! └── status_message: String        // header status text
//! ```
//!
//! `positions` is only ever written by `set_query`, so it always equals the
//! filter of the current query.

use log::{debug, warn};

use crate::core::catalog::{Catalog, VideoRecord};
use crate::core::config::ResolvedConfig;
use crate::core::filter;
use crate::core::navigation::{Section, UnknownSection};

pub struct App {
    catalog: Catalog,
    query: String,
    positions: Vec<usize>,
    section: Section,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let positions = (0..catalog.len()).collect();
        Self {
            catalog,
            query: String::new(),
            positions,
            section: Section::default(),
            status_message: String::new(),
        }
    }

    pub fn from_config(catalog: Catalog, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(catalog);
        app.section = config.section;
        app
    }

    /// Store the query verbatim and re-derive the filtered result.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.positions = filter::filter_positions(self.catalog.records(), &self.query);
        debug!(
            "Query set to {:?}: {} of {} videos",
            self.query,
            self.positions.len(),
            self.catalog.len()
        );
    }

    pub fn reset_search(&mut self) {
        self.set_query(String::new());
    }

    /// A tag click is a full-text search for the tag's text.
    pub fn click_tag(&mut self, tag: &str) {
        self.set_query(tag);
    }

    pub fn set_navigation_selection(&mut self, section: Section) {
        self.section = section;
    }

    /// Select a section by its string id. Unknown ids leave the selection unchanged.
    pub fn select_section_by_id(&mut self, id: &str) -> Result<(), UnknownSection> {
        match Section::from_id(id) {
            Ok(section) => {
                self.set_navigation_selection(section);
                Ok(())
            }
            Err(e) => {
                warn!("Rejected navigation selection: {}", e);
                Err(e)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn navigation_selection(&self) -> Section {
        self.section
    }

    /// Catalog indices of the current result, in catalog order.
    pub fn filtered_positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn filtered_result(&self) -> Vec<&VideoRecord> {
        self.positions
            .iter()
            .filter_map(|&i| self.catalog.get(i))
            .collect()
    }

    pub fn result_count(&self) -> usize {
        self.positions.len()
    }

    /// True only when a non-empty query found nothing. An empty catalog with
    /// no query is not "empty" in this sense.
    pub fn is_empty(&self) -> bool {
        self.result_count() == 0 && !self.query.is_empty()
    }
}
