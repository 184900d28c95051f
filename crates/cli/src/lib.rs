//! Orchard CLI
//!
//! Command-line interface and client wrapper for the Orchard fruit
//! registry daemon.

pub mod client;
pub mod commands;
pub mod output;
