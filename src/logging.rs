use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var with a log file path; takes precedence over `[logging] file`.
pub const LOG_ENV_VAR: &str = "BASKET_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `BASKET_LOG` or `[logging] file` names a log
/// file: stdout carries the menu and must stay clean.
///
/// Log files get unique names so concurrent runs don't collide:
/// `{path}.{timestamp}.{pid}`. Returns the path actually used.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)
        .map(PathBuf::from)
        .or_else(|| config.file.clone())?;

    let unique_path = unique_log_path(&base);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                unique_path.display(),
                e
            );
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed (tests); keep the existing one.
    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(unique_path)
}

fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base.display(), timestamp, pid))
}
