//! Configuration module for the command gateway
//!
//! This module provides configuration management and loading utilities.

mod config;

// Re-export the main configuration types
pub use config::{
    ChannelConfig, CliOverrides, Config, ConfigResolution, LoggingConfig, ServerConfig,
};
