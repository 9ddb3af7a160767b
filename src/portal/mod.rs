//! The portal view: session state, filtered collections, and cards.

pub mod cards;
pub mod state;
pub mod view;

pub use cards::{Badge, BadgeTone, Card, CardBlock, build_cards};
pub use state::PortalState;
pub use view::FilteredView;
