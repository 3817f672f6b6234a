use crate::error::LoggingError;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the filter directives, e.g. `typewriter_core=debug`.
pub const LOG_ENV: &str = "TYPEWRITER_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// `~/.typewriter/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".typewriter")
        .join("logs")
}

pub fn init_logging(component: &str, to_stderr: bool) -> Result<WorkerGuard, LoggingError> {
    init_logging_in(&log_dir(), component, to_stderr)
}

/// Install the global subscriber, writing `<component>.log.<date>` files
/// into `dir`. Fails if `dir` cannot be created or a subscriber is already
/// installed. Keep the guard alive until exit or buffered lines are lost.
pub fn init_logging_in(
    dir: &Path,
    component: &str,
    to_stderr: bool,
) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::daily(dir, format!("{component}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test: the global subscriber can only be installed once per process.
    #[test]
    fn test_init_logging_reports_failures() {
        let tmp = tempfile::tempdir().unwrap();

        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let err = init_logging_in(&blocker.join("logs"), "test", false).unwrap_err();
        assert!(matches!(err, LoggingError::Io(_)));

        let logs = tmp.path().join("logs");
        let _guard = init_logging_in(&logs, "test", false).unwrap();
        assert!(logs.is_dir());

        let err = init_logging_in(&logs, "test", false).unwrap_err();
        assert!(matches!(err, LoggingError::Init(_)));
    }
}
