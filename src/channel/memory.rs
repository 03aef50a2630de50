use async_trait::async_trait;
use std::sync::Mutex;

use super::ChannelWriter;
use crate::command::SerializedLine;
use crate::error::{CommandError, Result};

/// Records lines in memory instead of touching a channel
#[derive(Debug, Default)]
pub struct MemoryChannelWriter {
    lines: Mutex<Vec<String>>,
    fail_with: Option<std::io::ErrorKind>,
}

impl MemoryChannelWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose every append fails with `kind`
    pub fn failing(kind: std::io::ErrorKind) -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            fail_with: Some(kind),
        }
    }

    /// Lines written so far, in append order
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChannelWriter for MemoryChannelWriter {
    async fn write(&self, line: &SerializedLine) -> Result<()> {
        if let Some(kind) = self.fail_with {
            return Err(CommandError::write(
                "Memory channel rejected line",
                std::io::Error::from(kind),
            ));
        }

        let mut lines = self.lines.lock().map_err(|_| {
            CommandError::write(
                "Memory channel poisoned",
                std::io::Error::new(std::io::ErrorKind::Other, "lock poisoned"),
            )
        })?;
        lines.push(line.as_str().to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
