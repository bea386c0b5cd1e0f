use std::fs;

use tracing::{info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::LogSettings;

/// Initialize console logging, plus daily rolling files when `LOG_DIR` is set.
///
/// Console output goes to stderr so rendered reports on stdout stay clean.
/// With `LOG_FORMAT=json` the console emits one JSON object per event. The
/// file output always has two sinks: `gradeview.log` (errors, plain text) and
/// `gradeview.json` (info and above, structured).
pub fn init_tracing() {
    let settings = LogSettings::from_env();

    let compact_layer = (!settings.json).then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(settings.env_filter())
    });

    let json_console_layer = settings.json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(settings.env_filter())
    });

    let mut dir_error = None;
    let (file_layer, json_file_layer) = match settings.log_dir.as_deref() {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let error_appender = RollingFileAppender::new(Rotation::DAILY, dir, "gradeview.log");
                let file_layer = fmt::layer()
                    .with_writer(error_appender)
                    .with_target(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .with_filter(tracing_subscriber::EnvFilter::new("error"));

                let json_appender = RollingFileAppender::new(Rotation::DAILY, dir, "gradeview.json");
                let json_file_layer = fmt::layer()
                    .json()
                    .with_writer(json_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(tracing_subscriber::EnvFilter::new("info"));

                (Some(file_layer), Some(json_file_layer))
            }
            Err(e) => {
                dir_error = Some(format!("{dir}: {e}"));
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(compact_layer)
        .with(json_console_layer)
        .with(file_layer)
        .with(json_file_layer)
        .init();

    match (settings.log_dir.as_deref(), dir_error) {
        (_, Some(err)) => warn!("Could not create log directory {err}; logging to console only"),
        (Some(dir), None) => info!(log_dir = %dir, "File logging enabled"),
        (None, None) => {}
    }
}
