//! Career Portal - Browse job-seeker content from the terminal
//!
//! This library provides the pieces behind the `career-portal` binary:
//!
//! - A fixed [`ContentStore`] of practice questions, job requirements,
//!   roadmap steps and interview experiences
//! - A field-aware substring filter over any record kind
//! - The portal's session state and the cards rendered for it
//! - An interactive ratatui front-end and a small CLI
//!
//! # Example
//!
//! ```
//! use career_portal::{ContentStore, FilteredView, models::Feature};
//!
//! let store = ContentStore::builtin();
//! let view = FilteredView::new(&store, Feature::Dsa, "amazon");
//! assert_eq!(view.len(), 1);
//! ```

pub mod cli;
pub mod clipboard;
pub mod content;
pub mod filters;
pub mod logging;
pub mod models;
pub mod portal;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use content::ContentStore;
pub use filters::{Searchable, filter_records};
pub use portal::{Card, FilteredView, PortalState, build_cards};
