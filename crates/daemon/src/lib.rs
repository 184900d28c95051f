//! Orchard Daemon
//!
//! The fruit registry core, daemon configuration, and the HTTP API surface.

pub mod config;
pub mod http;
pub mod registry;

pub use config::DaemonConfig;
pub use http::ApiServer;
pub use registry::FruitRegistry;
