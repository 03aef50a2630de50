//! Error types for command translation and delivery

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for command gateway operations
pub type Result<T> = std::result::Result<T, CommandError>;

/// Main error type for the command gateway
#[derive(Error, Debug)]
pub enum CommandError {
    /// Request body could not be decoded
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// A field is missing or failed its validator
    #[error("Validation error: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// No schema is registered under this keyword
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// Appending to the external command channel failed
    #[error("Channel write error: {message}: {source}")]
    Write {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CommandError {
    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a validation error for one field
    pub fn validation<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown command error
    pub fn unknown_command<S: Into<String>>(name: S) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a channel write error
    pub fn write<S: Into<String>>(message: S, source: std::io::Error) -> Self {
        Self::Write {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Name of the offending field, for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            CommandError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get the error category for logging and response bodies
    pub fn category(&self) -> &'static str {
        match self {
            CommandError::Decode { .. } => "decode",
            CommandError::Validation { .. } => "validation",
            CommandError::UnknownCommand { .. } => "unknown_command",
            CommandError::Write { .. } => "write",
            CommandError::Config { .. } => "config",
            CommandError::Io(_) => "io",
            CommandError::Serde(_) => "serialization",
            CommandError::Yaml(_) => "yaml",
        }
    }
}

impl ResponseError for CommandError {
    fn status_code(&self) -> StatusCode {
        match self {
            CommandError::Decode { .. } | CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::UnknownCommand { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Channel failures keep the io detail out of the response body
        let message = match self {
            CommandError::Write { .. } | CommandError::Io(_) => {
                "Could not execute command".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.category(),
            "message": message,
            "field": self.field(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CommandError::decode("EOF").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CommandError::validation("Hostname", "is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CommandError::unknown_command("NOPE").status_code(),
            StatusCode::NOT_FOUND
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "no reader");
        assert_eq!(
            CommandError::write("append failed", io).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = CommandError::validation("Author", "is required");
        assert_eq!(err.field(), Some("Author"));
        assert_eq!(err.category(), "validation");
        assert_eq!(err.to_string(), "Validation error: Author: is required");
    }

    #[test]
    fn test_write_error_is_server_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CommandError::write("append failed", io);
        assert_eq!(err.field(), None);
        assert_eq!(err.category(), "write");
    }
}
