//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Props-Based Rendering
//!
//! Display components that receive all data as fields and borrow the
//! frame's `HitMap` to record what can be clicked:
//! - `Header` / `BottomNav`: brand, section tabs, status
//! - `VideoCard`: one catalog entry
//! - `EmptyState`: "nothing found" view with the reset button
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state in `TuiState` and emit events:
//! - `SearchBox`: the query editor
//! - `CardGrid`: scrollable grid with card/tag selection
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! Header::new(app.navigation_selection(), &app.status_message, true, &mut hits)
//!     .render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (top bar + bottom navigation)
//! ├── search_box/      (single-line query editor)
//! ├── video_card.rs    (card layout + widget)
//! ├── card_grid.rs     (responsive scrollable grid)
//! ├── empty_state.rs   (no results)
//! └── text.rs          (width-aware wrapping/truncation)
//! ```

pub mod card_grid;
pub mod empty_state;
pub mod header;
pub mod search_box;
pub mod text;
pub mod video_card;

pub use card_grid::{CardGrid, CardGridState, GridEvent};
pub use empty_state::EmptyState;
pub use header::{BottomNav, Header};
pub use search_box::{SearchBox, SearchEvent};
pub use video_card::{CardLayout, VideoCard};
