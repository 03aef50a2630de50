//! Startup summary logging

use crate::config::ConfigResolution;
use crate::registry::CommandRegistry;
use tracing::{info, warn};

/// Startup logger for resolved configuration and registry contents
pub struct StartupLogger;

impl StartupLogger {
    /// Display resolved configuration and what the gateway will serve
    pub fn display_startup_info(
        resolution: &ConfigResolution,
        version: &str,
        registry: &CommandRegistry,
    ) {
        info!("extcmd v{} starting...", version);

        Self::display_configuration_resolution(resolution);

        if !resolution.env_overrides.is_empty() {
            info!("Environment overrides:");
            for name in &resolution.env_overrides {
                info!("   {}", name);
            }
        }

        Self::display_channel(resolution);

        info!("Command registry: {} command kinds", registry.len());
        let time_stamped = registry
            .schemas()
            .iter()
            .filter(|schema| schema.is_time_stamped())
            .count();
        info!("   {} take their timestamp at enqueue time", time_stamped);
    }

    fn display_configuration_resolution(resolution: &ConfigResolution) {
        match &resolution.config_path {
            Some(path) => info!("Config file: {}", path.display()),
            None => info!("Config file: built-in defaults (no config file found)"),
        }
        info!(
            "Logging: level={} format={}",
            resolution.config.logging.level, resolution.config.logging.format
        );
        info!("HTTP bind: {}", resolution.config.server.bind_address());
    }

    fn display_channel(resolution: &ConfigResolution) {
        let channel = &resolution.config.channel;
        info!("Command channel: {}", channel.command_file.display());

        if !channel.command_file.exists() && !channel.create_if_missing {
            warn!(
                "Command channel {} does not exist yet; writes fail until the monitoring core creates it",
                channel.command_file.display()
            );
        }
        if !channel.serialize_writes {
            warn!("Channel writes are not serialized; relying on atomic appends");
        }
        if channel.timestamp_prefix {
            info!("Lines are prefixed with [<unix time>]");
        }
    }
}
