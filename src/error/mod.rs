//! Error handling module for the command gateway
//!
//! This module provides the error type shared by translation, delivery and the HTTP layer.

mod error;

// Re-export the main error types
pub use error::{CommandError, Result};
