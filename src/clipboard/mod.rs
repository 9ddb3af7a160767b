//! Clipboard access for copying card text.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

use crate::portal::Card;

/// Upper bound on copied text; cards are short, so anything larger is a bug
const MAX_CLIPBOARD_BYTES: usize = 64 * 1024;

/// Destination for copied text (the system clipboard, or a fake in tests)
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard, opened lazily on each copy
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        anyhow::bail!("Nothing to copy: card text is empty");
    }

    if text.len() > MAX_CLIPBOARD_BYTES {
        anyhow::bail!(
            "Card text too large for clipboard ({} bytes, max {})",
            text.len(),
            MAX_CLIPBOARD_BYTES
        );
    }

    Ok(())
}

/// Copy the plain-text form of `card` through `provider`
///
/// Validation runs before the provider is touched, so an empty or oversized
/// card never opens the system clipboard.
pub fn copy_card(card: &Card, provider: &mut dyn ClipboardProvider) -> Result<()> {
    let text = card.to_plain_text();
    validate_clipboard_text(&text)?;
    provider.set_text(&text)?;
    debug!(bytes = text.len(), title = %card.title, "card copied to clipboard");
    Ok(())
}
