//! Configuration types, persistence, and the reconfigure effect calculus.

pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{ConfigFile, Effects, LoggingConfig, Settings, reconfigure};
