//! Configuration management for the command gateway

use crate::error::{CommandError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// External command channel configuration
    pub channel: ChannelConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Worker threads (defaults to the number of CPUs)
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

/// Command channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// File or named pipe the monitoring core polls
    pub command_file: PathBuf,
    /// Create a regular file if the path does not exist
    pub create_if_missing: bool,
    /// Hold a process-wide lock around each append
    pub serialize_writes: bool,
    /// Prefix lines with `[<unix time>] `
    pub timestamp_prefix: bool,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            command_file: PathBuf::from("/usr/local/nagios/var/rw/nagios.cmd"),
            create_if_missing: false,
            serialize_writes: true,
            timestamp_prefix: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log format (json, text)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(CommandError::config("Server host cannot be empty"));
        }
        if self.port == 0 {
            return Err(CommandError::config("Server port must be greater than 0"));
        }
        if self.workers == Some(0) {
            return Err(CommandError::config("Server workers must be greater than 0"));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ChannelConfig {
    /// Validate channel configuration
    pub fn validate(&self) -> Result<()> {
        if self.command_file.as_os_str().is_empty() {
            return Err(CommandError::config("Command file path cannot be empty"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<()> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(CommandError::config(format!(
                    "Invalid log level: '{}'. Valid levels: trace, debug, info, warn, error",
                    self.level
                )))
            }
        }

        match self.format.to_lowercase().as_str() {
            "json" | "text" => {}
            _ => {
                return Err(CommandError::config(format!(
                    "Invalid log format: '{}'. Valid formats: json, text",
                    self.format
                )))
            }
        }

        Ok(())
    }
}

/// Values given on the command line; highest precedence
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub command_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Loaded configuration plus where its values came from
#[derive(Debug, Clone)]
pub struct ConfigResolution {
    pub config: Config,
    /// Config file that was read, if any
    pub config_path: Option<PathBuf>,
    /// Environment variables that overrode file values
    pub env_overrides: Vec<String>,
}

impl Config {
    /// Load .env files in order of precedence
    fn load_env_files() {
        let env = std::env::var("EXTCMD_ENV").unwrap_or_else(|_| "development".to_string());

        let env_specific_file = format!(".env.{}", env);
        let env_files = [".env", env_specific_file.as_str(), ".env.local"];

        for env_file in env_files {
            match dotenvy::from_filename(env_file) {
                Ok(_) => {
                    tracing::info!("Loaded environment variables from {}", env_file);
                }
                Err(e) if e.not_found() => {
                    tracing::debug!("No {} file found, skipping", env_file);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", env_file, e);
                }
            }
        }
    }

    /// Read a YAML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CommandError::config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| CommandError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration with precedence defaults < file < environment < CLI
    pub fn load_with_resolution<P: AsRef<Path>>(
        path: P,
        cli: CliOverrides,
    ) -> Result<ConfigResolution> {
        Self::load_env_files();

        let (mut config, config_path) = if path.as_ref().exists() {
            (Self::from_file(&path)?, Some(path.as_ref().to_path_buf()))
        } else {
            tracing::warn!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            (Self::default(), None)
        };

        let env_overrides = config.apply_environment_overrides()?;

        if let Some(host) = cli.host {
            config.server.host = host;
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(command_file) = cli.command_file {
            config.channel.command_file = command_file;
        }
        if let Some(level) = cli.log_level {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(ConfigResolution {
            config,
            config_path,
            env_overrides,
        })
    }

    /// Apply environment variable overrides, returning the names that were applied
    pub fn apply_environment_overrides(&mut self) -> Result<Vec<String>> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<Vec<String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = Vec::new();
        let mut var = |name: &'static str| -> Option<String> {
            let value = lookup(name).filter(|value| !value.is_empty())?;
            applied.push(name.to_string());
            Some(value)
        };

        if let Some(host) = var("EXTCMD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("EXTCMD_PORT") {
            self.server.port = port.parse().map_err(|e| {
                CommandError::config(format!("Invalid EXTCMD_PORT environment variable: {}", e))
            })?;
        }
        if let Some(command_file) = var("EXTCMD_COMMAND_FILE") {
            self.channel.command_file = PathBuf::from(command_file);
        }
        if let Some(serialize) = var("EXTCMD_SERIALIZE_WRITES") {
            self.channel.serialize_writes = serialize.parse().map_err(|e| {
                CommandError::config(format!(
                    "Invalid EXTCMD_SERIALIZE_WRITES environment variable: {}",
                    e
                ))
            })?;
        }
        if let Some(prefix) = var("EXTCMD_TIMESTAMP_PREFIX") {
            self.channel.timestamp_prefix = prefix.parse().map_err(|e| {
                CommandError::config(format!(
                    "Invalid EXTCMD_TIMESTAMP_PREFIX environment variable: {}",
                    e
                ))
            })?;
        }
        if let Some(level) = var("EXTCMD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("EXTCMD_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(applied)
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.channel.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
