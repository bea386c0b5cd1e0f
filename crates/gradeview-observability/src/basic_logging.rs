use std::env;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging settings read from the environment.
///
/// - `LOG_LEVEL`: Level for Gradeview crates (default: "info"); `RUST_LOG` overrides the whole filter
/// - `LOG_FORMAT`: `compact` (default) or `json`
/// - `LOG_DIR`: Directory for daily rolling log files (default: unset, no file output)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
    pub log_dir: Option<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            json: var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
            log_dir: var("LOG_DIR"),
        }
    }

    /// Filter used when `RUST_LOG` is not set: the configured level for our
    /// crates, `warn` for the HTTP stack.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "gradeview={level},gradeview_cli={level},reqwest=warn,hyper=warn,hyper_util=warn",
                level = self.level
            ))
        })
    }
}

/// Initialize compact console logging on stderr.
///
/// Used when the `observability` feature is disabled, and by binaries that
/// never want file output.
pub fn init_basic_console_logging() {
    let settings = LogSettings::from_env();

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_filter(settings.env_filter());

    tracing_subscriber::registry().with(console_layer).init();
}
