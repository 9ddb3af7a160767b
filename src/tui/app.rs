//! TUI application state and event handling.
//!
//! The `App` owns the content store, the [`PortalState`] and a handful of
//! view-only fields (card cursor, transient status message, redraw flag). It
//! runs the event loop via `run()`: every key press is turned into an
//! [`Action`], applied to the state to completion, and the next frame is
//! built from scratch by filtering the active collection and building its
//! cards.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::{ClipboardProvider, SystemClipboard, copy_card};
use crate::content::ContentStore;
use crate::portal::{Card, FilteredView, PortalState, build_cards};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Cards skipped by PageUp/PageDown
const PAGE_SIZE: isize = 10;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    store: ContentStore,
    state: PortalState,
    selected_card: usize,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    clipboard: Box<dyn ClipboardProvider>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(store: ContentStore) -> Self {
        Self::with_clipboard(store, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(store: ContentStore, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            store,
            state: PortalState::new(),
            selected_card: 0,
            should_quit: false,
            status_message: None,
            clipboard,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn state(&self) -> &PortalState {
        &self.state
    }

    /// Cards for the active collection under the current query
    pub fn visible_cards(&self) -> Vec<Card> {
        let view = FilteredView::new(
            &self.store,
            self.state.selected_feature(),
            self.state.search_query(),
        );
        build_cards(&view)
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(feature = self.state.selected_feature().id(), "portal started");

        while !self.should_quit {
            self.check_and_clear_expired_status();

            let cards = self.visible_cards();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let render_state = RenderState {
                        portal: &self.state,
                        cards: &cards,
                        selected_card: self.selected_card,
                        total_count: self.store.len_of(self.state.selected_feature()),
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &render_state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action, cards.len());
        }

        info!("portal closed");
        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action, card_count: usize) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.state.clear_query() {
                    self.reset_cursor();
                } else {
                    self.should_quit = true;
                }
            }
            Action::NextFeature => {
                self.state.select_next();
                self.reset_cursor();
            }
            Action::PrevFeature => {
                self.state.select_prev();
                self.reset_cursor();
            }
            Action::SelectFeature(feature) => {
                self.state.select(feature);
                self.reset_cursor();
            }
            Action::ToggleSidebar => {
                self.state.toggle_sidebar();
                self.needs_redraw = true;
            }
            Action::MoveUp => self.move_selection(-1, card_count),
            Action::MoveDown => self.move_selection(1, card_count),
            Action::PageUp => self.move_selection(-PAGE_SIZE, card_count),
            Action::PageDown => self.move_selection(PAGE_SIZE, card_count),
            Action::UpdateSearch(c) => {
                self.state.push_char(c);
                self.reset_cursor();
            }
            Action::DeleteChar => {
                if self.state.pop_char() {
                    self.reset_cursor();
                }
            }
            Action::CopyCard => self.copy_selected_card(),
            Action::None => {}
        }
    }

    fn copy_selected_card(&mut self) {
        let cards = self.visible_cards();
        let Some(card) = cards.get(self.selected_card) else {
            let text = if cards.is_empty() { "✗ No card to copy" } else { "✗ Invalid selection" };
            self.set_status(text, MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_card(card, self.clipboard.as_mut()) {
            Ok(()) => {
                self.set_status(
                    "✓ Copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn reset_cursor(&mut self) {
        self.selected_card = 0;
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_card = 0;
            return;
        }

        let old_idx = self.selected_card;
        let new_idx = (self.selected_card as isize + delta).max(0) as usize;
        self.selected_card = new_idx.min(total - 1);

        if old_idx != self.selected_card {
            debug!(card = self.selected_card, "card cursor moved");
            self.needs_redraw = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::Feature;

    /// Clipboard double that shares what it received with the test
    struct RecordingClipboard {
        copied: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardProvider for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                anyhow::bail!("clipboard unavailable");
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn create_app() -> (App, Rc<RefCell<Vec<String>>>) {
        let copied = Rc::new(RefCell::new(Vec::new()));
        let clipboard = RecordingClipboard { copied: Rc::clone(&copied), fail: false };
        (App::with_clipboard(ContentStore::builtin(), Box::new(clipboard)), copied)
    }

    fn type_query(app: &mut App, query: &str) {
        for c in query.chars() {
            app.handle_action(Action::UpdateSearch(c), 0);
        }
    }

    #[test]
    fn test_app_new_initializes_state() {
        let (app, _) = create_app();

        assert_eq!(app.state.selected_feature(), Feature::Dsa);
        assert_eq!(app.state.search_query(), "");
        assert!(app.state.sidebar_open());
        assert_eq!(app.selected_card, 0);
        assert!(!app.should_quit);
        assert_eq!(app.visible_cards().len(), 3);
    }

    #[test]
    fn test_typing_filters_cards() {
        let (mut app, _) = create_app();
        type_query(&mut app, "Amazon");

        let cards = app.visible_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Valid Parentheses");
    }

    #[test]
    fn test_select_feature_switches_collection() {
        let (mut app, _) = create_app();

        for feature in Feature::ALL {
            app.handle_action(Action::SelectFeature(feature), 0);
            assert_eq!(app.state.selected_feature(), feature);
            assert_eq!(app.visible_cards().len(), app.store.len_of(feature));
        }
    }

    #[test]
    fn test_next_and_prev_feature() {
        let (mut app, _) = create_app();

        app.handle_action(Action::NextFeature, 0);
        assert_eq!(app.state.selected_feature(), Feature::Requirements);

        app.handle_action(Action::PrevFeature, 0);
        app.handle_action(Action::PrevFeature, 0);
        assert_eq!(app.state.selected_feature(), Feature::Experience);
    }

    #[test]
    fn test_feature_change_resets_cursor() {
        let (mut app, _) = create_app();
        app.handle_action(Action::MoveDown, 3);
        assert_eq!(app.selected_card, 1);

        app.handle_action(Action::NextFeature, 0);
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_toggle_sidebar_twice() {
        let (mut app, _) = create_app();
        app.handle_action(Action::ToggleSidebar, 0);
        assert!(!app.state.sidebar_open());
        app.handle_action(Action::ToggleSidebar, 0);
        assert!(app.state.sidebar_open());
    }

    #[test]
    fn test_move_selection_bounds() {
        let (mut app, _) = create_app();

        app.move_selection(-10, 3);
        assert_eq!(app.selected_card, 0);

        app.move_selection(10, 3);
        assert_eq!(app.selected_card, 2);

        app.move_selection(-1, 3);
        assert_eq!(app.selected_card, 1);
    }

    #[test]
    fn test_move_selection_empty() {
        let (mut app, _) = create_app();
        app.selected_card = 4;
        app.move_selection(1, 0);
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_page_actions() {
        let (mut app, _) = create_app();
        app.handle_action(Action::PageDown, 30);
        assert_eq!(app.selected_card, 10);
        app.handle_action(Action::PageUp, 30);
        assert_eq!(app.selected_card, 0);
    }

    #[test]
    fn test_delete_char() {
        let (mut app, _) = create_app();
        type_query(&mut app, "ab");

        app.handle_action(Action::DeleteChar, 0);
        assert_eq!(app.state.search_query(), "a");
        app.handle_action(Action::DeleteChar, 0);
        app.handle_action(Action::DeleteChar, 0);
        assert_eq!(app.state.search_query(), "");
    }

    #[test]
    fn test_clear_search_when_active() {
        let (mut app, _) = create_app();
        type_query(&mut app, "google");

        app.handle_action(Action::ClearSearch, 0);

        assert_eq!(app.state.search_query(), "");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_clear_search_when_empty_quits() {
        let (mut app, _) = create_app();
        app.handle_action(Action::ClearSearch, 0);
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_action_quit() {
        let (mut app, _) = create_app();
        app.handle_action(Action::Quit, 0);
        assert!(app.should_quit);
    }

    #[test]
    fn test_handle_action_none() {
        let (mut app, _) = create_app();
        let before = app.state.clone();
        app.handle_action(Action::None, 3);
        assert_eq!(app.state, before);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_copy_selected_card() {
        let (mut app, copied) = create_app();
        app.handle_action(Action::MoveDown, 3);
        app.handle_action(Action::CopyCard, 3);

        let copied = copied.borrow();
        assert_eq!(copied.len(), 1);
        assert!(copied[0].starts_with("Valid Parentheses [Easy]"));

        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Success);
    }

    #[test]
    fn test_copy_with_no_cards() {
        let (mut app, copied) = create_app();
        type_query(&mut app, "no such question");
        app.handle_action(Action::CopyCard, 0);

        assert!(copied.borrow().is_empty());
        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.text.contains("No card"));
    }

    #[test]
    fn test_copy_invalid_selection() {
        let (mut app, _) = create_app();
        app.selected_card = 10;
        app.handle_action(Action::CopyCard, 3);

        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.text.contains("Invalid selection"));
    }

    #[test]
    fn test_copy_clipboard_failure_sets_error() {
        let copied = Rc::new(RefCell::new(Vec::new()));
        let clipboard = RecordingClipboard { copied, fail: true };
        let mut app = App::with_clipboard(ContentStore::builtin(), Box::new(clipboard));

        app.handle_action(Action::CopyCard, 3);

        let status = app.status_message.as_ref().unwrap();
        assert_eq!(status.message_type, MessageType::Error);
        assert!(status.text.contains("clipboard unavailable"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_check_and_clear_expired_status_clears_expired() {
        let (mut app, _) = create_app();
        app.set_status("Expired", MessageType::Success, 0);
        std::thread::sleep(Duration::from_millis(1));

        app.check_and_clear_expired_status();

        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_check_and_clear_expired_status_keeps_active() {
        let (mut app, _) = create_app();
        app.set_status("Active", MessageType::Success, 10000);

        app.check_and_clear_expired_status();

        assert_eq!(app.status_message.as_ref().unwrap().text, "Active");
    }
}
