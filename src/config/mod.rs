//! Configuration module for the bridge
//!
//! This module provides the `BridgeConfig` struct and its fluent builder
//! for configuring bridge runs with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::BridgeConfigBuilder;
pub use types::{BridgeConfig, ConfigError};
