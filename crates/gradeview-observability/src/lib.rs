//! Gradeview Observability
//!
//! Logging setup for Gradeview binaries. The engine crates only emit `tracing`
//! events; this crate decides where they go.
//!
//! # Features
//!
//! - `observability` (default): JSON console output and daily rolling log files
//!
//! Without the feature, [`init_tracing`] falls back to compact console logging.
//!
//! # Examples
//!
//! ```no_run
//! use gradeview_observability::init_tracing;
//!
//! init_tracing();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;
#[cfg(feature = "observability")]
pub mod logging;

pub use basic_logging::{LogSettings, init_basic_console_logging};

#[cfg(feature = "observability")]
pub use logging::init_tracing;

#[cfg(not(feature = "observability"))]
pub fn init_tracing() {
    init_basic_console_logging();
}
