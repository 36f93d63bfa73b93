//! # Navigation Sections
//!
//! The closed set of top-level sections shown in the header. Selecting a
//! section does not touch search state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Playlists,
    History,
    Profile,
}

/// A section id outside the closed set. Always a caller bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown section '{}' (expected one of: home, catalog, playlists, history, profile)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSection {}

impl Section {
    /// Display order, left to right.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Catalog,
        Section::Playlists,
        Section::History,
        Section::Profile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::Playlists => "playlists",
            Section::History => "history",
            Section::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::Playlists => "Плейлисты",
            Section::History => "История",
            Section::Profile => "Профиль",
        }
    }

    /// Single-width glyph used in place of the web icons.
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Home => "⌂",
            Section::Catalog => "▦",
            Section::Playlists => "≡",
            Section::History => "↺",
            Section::Profile => "◉",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn from_id(id: &str) -> Result<Section, UnknownSection> {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| UnknownSection(id.to_string()))
    }
}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_id(s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
