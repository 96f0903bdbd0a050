use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "todoflow=info";

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log file path: {0}")]
    InvalidPath(PathBuf),
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the background log writer alive; logs are flushed when dropped
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Route `tracing` output to `path`. The terminal belongs to the TUI, so
/// nothing is ever written to stdout or stderr.
pub fn init_logging(path: &Path) -> Result<LoggingGuard, LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|e| LoggingError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(LoggingGuard { _guard: guard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskStore;
    use crate::ops::task_ops::{TaskDraft, add_task};
    use tempfile::TempDir;

    #[test]
    fn test_logs_reach_file_in_new_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("sub/dir/todoflow.log");

        let guard = init_logging(&path).unwrap();
        let mut store = TaskStore::new();
        let draft = TaskDraft {
            title: "Buy milk".into(),
            ..Default::default()
        };
        add_task(&mut store, &draft).unwrap();
        // Dropping the guard flushes the background writer
        drop(guard);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging initialized"), "log was: {}", contents);
        assert!(contents.contains("task added"), "log was: {}", contents);
    }

    #[test]
    fn test_path_without_file_name_is_rejected() {
        let err = init_logging(Path::new("/")).err().unwrap();
        assert!(matches!(err, LoggingError::InvalidPath(_)));
    }
}
