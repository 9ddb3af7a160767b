use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default log file used while the TUI is running
///
/// Lives under the platform cache directory, e.g.
/// `~/.cache/career-portal/career-portal.log` on Linux.
pub fn default_log_file() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("Could not determine cache directory")?;
    Ok(cache.join("career-portal").join("career-portal.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_file_location() {
        // Headless CI may lack a cache dir; only check the shape when present
        if let Ok(path) = default_log_file() {
            assert!(path.ends_with("career-portal/career-portal.log"));
        }
    }
}
