use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    /// Human-readable output on stderr (off while the TUI owns the screen)
    pub stderr: bool,
    /// JSON lines appended to a daily-rolling file
    pub file: Option<PathBuf>,
}

/// Directive used when `RUST_LOG` is unset or invalid
fn default_directive(verbose: bool) -> String {
    let default_level = if verbose { "debug" } else { "info" };
    format!("career_portal={}", default_level)
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Open a daily-rolling appender writing `<file name>.<date>` next to `path`
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(path);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(&dir)
        .with_context(|| format!("Failed to create log file in {}", dir.display()))
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` overrides the level picked from `verbose`.
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let stderr_layer = target.stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    let file_layer = match &target.file {
        Some(path) => {
            let appender = file_appender(path)?;
            Some(fmt::layer().with_writer(appender).with_ansi(false).json())
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Split a log file path into (directory, file name prefix)
fn split_log_path(path: &Path) -> (PathBuf, String) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "career-portal.log".to_string());
    (dir, file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path_with_dir() {
        let (dir, name) = split_log_path(Path::new("/tmp/logs/portal.log"));
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "portal.log");
    }

    #[test]
    fn test_split_log_path_bare_file() {
        let (dir, name) = split_log_path(Path::new("portal.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "portal.log");
    }

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(true), "career_portal=debug");
        assert_eq!(default_directive(false), "career_portal=info");
    }

    #[test]
    fn test_file_appender_creates_missing_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let log_path = temp_dir.path().join("nested").join("portal.log");

        assert!(file_appender(&log_path).is_ok());
        assert!(temp_dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_file_appender_parent_is_a_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = file_appender(&blocker.join("portal.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to create log directory"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_file_appender_uncreatable_file_is_an_error() {
        // /proc/self exists but refuses new files
        let err = file_appender(Path::new("/proc/self/portal.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
