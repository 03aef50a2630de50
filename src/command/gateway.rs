//! Request → schema lookup → normalize → serialize → channel append

use std::sync::Arc;
use tracing::{error, info, warn};

use super::normalize::normalize;
use super::request::RawRequest;
use super::serialize::{CommandSerializer, SerializedLine};
use crate::channel::ChannelWriter;
use crate::error::{CommandError, Result};
use crate::registry::{CommandRegistry, CommandSchema};

/// Translates requests into command lines and hands them to the channel
#[derive(Clone)]
pub struct CommandGateway {
    registry: &'static CommandRegistry,
    serializer: CommandSerializer,
    writer: Arc<dyn ChannelWriter>,
}

impl CommandGateway {
    pub fn new(serializer: CommandSerializer, writer: Arc<dyn ChannelWriter>) -> Self {
        Self {
            registry: CommandRegistry::global(),
            serializer,
            writer,
        }
    }

    pub fn registry(&self) -> &'static CommandRegistry {
        self.registry
    }

    pub fn schema(&self, name: &str) -> Result<&'static CommandSchema> {
        self.registry
            .lookup(name)
            .ok_or_else(|| CommandError::unknown_command(name))
    }

    /// Build the line for `name` without writing it
    pub fn translate(&self, name: &str, raw: &RawRequest) -> Result<SerializedLine> {
        let schema = self.schema(name)?;
        let command = normalize(schema, raw)?;
        Ok(self.serializer.serialize(&command))
    }

    /// Translate and append one command. Nothing is written unless the
    /// whole request normalizes.
    pub async fn submit(&self, name: &str, raw: RawRequest) -> Result<SerializedLine> {
        let line = match self.translate(name, &raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(command = name, category = e.category(), "Rejected command: {}", e);
                return Err(e);
            }
        };

        if let Err(e) = self.writer.write(&line).await {
            error!(
                command = name,
                channel = %self.writer.describe(),
                "Command not delivered: {}",
                e
            );
            return Err(e);
        }

        info!(command = line.keyword(), bytes = line.len(), "Command submitted");
        Ok(line)
    }
}

impl std::fmt::Debug for CommandGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandGateway")
            .field("commands", &self.registry.len())
            .field("serializer", &self.serializer)
            .field("channel", &self.writer.describe())
            .finish()
    }
}
