//! Session state for the portal view.
//!
//! [`PortalState`] holds the three pieces of ephemeral UI state: the active
//! collection tag, the free-text query, and sidebar visibility. Every
//! transition is synchronous and infallible.

use tracing::debug;

use crate::models::Feature;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalState {
    selected_feature: Feature,
    search_query: String,
    sidebar_open: bool,
}

impl PortalState {
    pub fn new() -> Self {
        Self { selected_feature: Feature::default(), search_query: String::new(), sidebar_open: true }
    }

    pub fn selected_feature(&self) -> Feature {
        self.selected_feature
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Make `feature` the active collection; the query is kept
    pub fn select(&mut self, feature: Feature) {
        if self.selected_feature != feature {
            debug!(from = self.selected_feature.id(), to = feature.id(), "feature selected");
        }
        self.selected_feature = feature;
    }

    pub fn select_next(&mut self) {
        self.select(self.selected_feature.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected_feature.prev());
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
        debug!(open = self.sidebar_open, "sidebar toggled");
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    /// Remove the last query character; false when the query was already empty
    pub fn pop_char(&mut self) -> bool {
        self.search_query.pop().is_some()
    }

    /// Clear the query; false when there was nothing to clear
    pub fn clear_query(&mut self) -> bool {
        if self.search_query.is_empty() {
            return false;
        }
        self.search_query.clear();
        true
    }
}

impl Default for PortalState {
    fn default() -> Self {
        Self::new()
    }
}
