//! # Configuration
//!
//! Client settings shared by the terminal and browser front-ends.

pub mod client;

pub use client::{ClientConfig, ConfigError, ConfigFormat};
