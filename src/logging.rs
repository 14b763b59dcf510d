use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE_NAME: &str = "lingoboard.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose`. Human-readable output always goes to
/// stderr so stdout stays clean for `render --json` and `--html`. With
/// `log_file` set, JSON lines are also appended to a daily-rotated file.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.as_deref().map(|path| {
        fmt::layer()
            .with_writer(rolling_appender(path))
            .with_ansi(false)
            .json()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

fn rolling_appender(path: &Path) -> RollingFileAppender {
    let (dir, file_name) = split_log_path(path);
    let _ = std::fs::create_dir_all(dir);
    tracing_appender::rolling::daily(dir, file_name)
}

/// Directory and file-name prefix for the rolling appender.
fn split_log_path(path: &Path) -> (&Path, &OsStr) {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_NAME));
    (dir, file_name)
}

/// Filter used when `RUST_LOG` is not set. The HTTP trace layer logs under
/// `tower_http`, so verbose mode turns that on as well.
fn default_directive(verbose: bool) -> String {
    if verbose {
        "lingoboard=debug,tower_http=debug".to_string()
    } else {
        "lingoboard=info".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "lingoboard=info");
        assert!(default_directive(true).contains("lingoboard=debug"));
        assert!(default_directive(true).contains("tower_http=debug"));
    }

    #[test]
    fn test_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("logs/board.log"));
        assert_eq!(dir, Path::new("logs"));
        assert_eq!(name, OsStr::new("board.log"));

        let (dir, name) = split_log_path(Path::new("board.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, OsStr::new("board.log"));

        let (_, name) = split_log_path(Path::new("/"));
        assert_eq!(name, OsStr::new(DEFAULT_LOG_FILE_NAME));
    }

    #[test]
    fn test_rolling_appender_creates_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("board.log");
        let _appender = rolling_appender(&path);
        assert!(temp_dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_logging_smoke() {
        init_test_logging();
        tracing::debug!("test logging initialized");
    }
}
