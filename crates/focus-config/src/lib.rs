//! Configuration for the focus tool.
//!
//! Loaded from `<focus dir>/config.toml`. Every field has a default, so a
//! missing file or a partial file both produce a usable config.

pub mod errors;
pub mod loading;
pub mod types;
pub mod validation;

pub use errors::ConfigError;
pub use loading::{CONFIG_FILE_NAME, load_config};
pub use types::{FocusConfig, NotificationSettings, SessionSettings, WatcherSettings};
pub use validation::validate_config;
