use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no logging.
pub const LOG_ENV_VAR: &str = "BUDGET_CLIENT_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so command output stays clean.
/// Set `BUDGET_CLIENT_LOG` to a file path to enable it; the level is taken
/// from `RUST_LOG` (default `info`). Log lines are appended, so repeated
/// invocations share one file.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path);
    let Ok(file) = file else {
        eprintln!("Warning: Failed to open log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
