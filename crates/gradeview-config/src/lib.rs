//! # Gradeview Config
//!
//! Configuration types for Gradeview, loaded from environment variables.
//!
//! - [`portal`]: Remote portal endpoints, session cookie name, and transport settings
//!
//! # Example
//!
//! ```ignore
//! use gradeview_config::PortalConfig;
//!
//! let config = PortalConfig::from_env();
//! println!("logging in at {}", config.login_url());
//! ```

pub mod portal;

// Re-export commonly used types at crate root
pub use portal::PortalConfig;
