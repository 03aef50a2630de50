//! extcmd - HTTP gateway for monitoring-core external commands
//!
//! This crate translates structured JSON requests (acknowledge problems, add or
//! delete comments, toggle checks and notifications, schedule checks and
//! downtime) into the semicolon-delimited external command lines a monitoring
//! core polls for, and appends them to its command channel.

pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod registry;
pub mod startup;
pub mod web;

pub use channel::{ChannelWriter, FileChannelWriter, MemoryChannelWriter};
pub use command::{CommandGateway, CommandSerializer, RawRequest, SerializedLine};
pub use config::Config;
pub use error::{CommandError, Result};
pub use registry::{CommandRegistry, CommandSchema};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "extcmd.yaml";
