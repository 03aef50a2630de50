//! Rendering normalized commands into channel lines

use std::fmt::{self, Write as _};
use std::sync::Arc;

use super::normalize::{FieldValue, NormalizedCommand, FIELD_SEPARATOR};

/// Source of the current Unix time
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// A newline-terminated line ready to append to the command channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedLine {
    keyword: &'static str,
    line: String,
}

impl SerializedLine {
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.line.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn into_string(self) -> String {
        self.line
    }
}

impl fmt::Display for SerializedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.line.trim_end_matches('\n'))
    }
}

/// Renders `KEYWORD;v1;...;vN\n`, optionally prefixed with `[now] `
#[derive(Clone)]
pub struct CommandSerializer {
    clock: Arc<dyn Clock>,
    timestamp_prefix: bool,
}

impl CommandSerializer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            timestamp_prefix: false,
        }
    }

    /// Prefix every line with the monitoring core's `[<unix time>] ` marker
    pub fn with_timestamp_prefix(mut self, enabled: bool) -> Self {
        self.timestamp_prefix = enabled;
        self
    }

    /// Render one line. Time-stamped fields take the clock's value at this
    /// call, not at request receipt.
    pub fn serialize(&self, command: &NormalizedCommand) -> SerializedLine {
        let now = self.clock.now();
        let mut line = String::with_capacity(64);

        if self.timestamp_prefix {
            let _ = write!(line, "[{}] ", now);
        }
        line.push_str(command.keyword());

        for value in command.values() {
            line.push(FIELD_SEPARATOR);
            match value {
                FieldValue::CurrentTime => {
                    let _ = write!(line, "{}", now);
                }
                other => {
                    let _ = write!(line, "{}", other);
                }
            }
        }
        line.push('\n');

        SerializedLine {
            keyword: command.keyword(),
            line,
        }
    }
}

impl Default for CommandSerializer {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl fmt::Debug for CommandSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSerializer")
            .field("timestamp_prefix", &self.timestamp_prefix)
            .finish()
    }
}
