//! Orchard Common Library
//!
//! Shared types, wire messages, and the error taxonomy for the Orchard
//! platform.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

/// Orchard version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the daemon API
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:7070";

/// Default store path
pub fn default_store_path() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".orchard")
}

/// Default configuration file path for the daemon
pub fn default_config_path() -> std::path::PathBuf {
    default_store_path().join("config.toml")
}

/// Home directory helper
mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}
