//! # Core Application Logic
//!
//! This module contains VideoHub's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (videos)     │
//!                    │  • filter() (search)    │
//!                    │  • App (view state)     │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `VideoRecord` and the immutable `Catalog`
//! - [`filter`]: case-insensitive multi-field substring search
//! - [`navigation`]: the closed set of header sections
//! - [`state`]: the `App` struct (query, filtered result, section)
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: `~/.videohub/config.toml` loading and resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod navigation;
pub mod state;
