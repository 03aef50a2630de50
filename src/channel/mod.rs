//! External command channel writers
//!
//! The monitoring core owns the channel (a regular file or a named pipe) and
//! polls it. Writers append whole lines and never retry.

mod file;
mod memory;

pub use file::FileChannelWriter;
pub use memory::MemoryChannelWriter;

use async_trait::async_trait;

use crate::command::SerializedLine;
use crate::error::Result;

/// Appends serialized command lines to the command channel
#[async_trait]
pub trait ChannelWriter: Send + Sync {
    /// Append one line. A failure is terminal for the request.
    async fn write(&self, line: &SerializedLine) -> Result<()>;

    /// Human readable target, used in logs
    fn describe(&self) -> String;
}
