//! Interactive terminal UI for browsing the portal.
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalGuard;
use tracing::info;

use crate::content::ContentStore;

/// Run the interactive TUI until the user quits
pub fn run_interactive(store: ContentStore) -> Result<()> {
    info!(records = store.total_len(), "launching interactive portal");

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(store);

    let res = app.run(guard.terminal_mut());

    guard.restore()?;
    res
}
