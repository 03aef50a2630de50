use async_trait::async_trait;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::ChannelWriter;
use crate::command::SerializedLine;
use crate::config::ChannelConfig;
use crate::error::{CommandError, Result};

/// Appends to a file or named pipe with open-append-write-close per line
#[derive(Debug)]
pub struct FileChannelWriter {
    path: PathBuf,
    create_if_missing: bool,
    /// Held across the append when the channel cannot interleave writers safely.
    /// The owned guard moves into the blocking task, so a cancelled request
    /// keeps the lock until its append finishes.
    lock: Option<Arc<Mutex<()>>>,
}

impl FileChannelWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            create_if_missing: false,
            lock: Some(Arc::new(Mutex::new(()))),
        }
    }

    pub fn from_config(config: &ChannelConfig) -> Self {
        Self::new(&config.command_file)
            .create_if_missing(config.create_if_missing)
            .serialize_writes(config.serialize_writes)
    }

    /// Create a regular file when the path does not exist yet
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Serialize appends behind a process-wide lock
    pub fn serialize_writes(mut self, serialize: bool) -> Self {
        self.lock = serialize.then(|| Arc::new(Mutex::new(())));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn append_line(path: &Path, create: bool, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(create)
        .open(path)
        .map_err(|e| CommandError::write(format!("Failed to open {}", path.display()), e))?;

    // One buffer, one append; the handle is closed on drop
    file.write_all(bytes)
        .map_err(|e| CommandError::write(format!("Failed to append to {}", path.display()), e))
}

#[async_trait]
impl ChannelWriter for FileChannelWriter {
    async fn write(&self, line: &SerializedLine) -> Result<()> {
        let guard = match &self.lock {
            Some(lock) => Some(Arc::clone(lock).lock_owned().await),
            None => None,
        };

        let path = self.path.clone();
        let create = self.create_if_missing;
        let bytes = line.as_bytes().to_vec();

        // Opening a FIFO blocks until the core has it open for reading
        let result = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            append_line(&path, create, &bytes)
        })
        .await
        .map_err(|e| {
            CommandError::write(
                "Channel writer task failed",
                std::io::Error::new(std::io::ErrorKind::Other, e),
            )
        })?;

        match &result {
            Ok(()) => debug!(
                command = line.keyword(),
                bytes = line.len(),
                path = %self.path.display(),
                "Appended command line"
            ),
            Err(e) => debug!(
                command = line.keyword(),
                path = %self.path.display(),
                "Append failed: {}",
                e
            ),
        }
        result
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{normalize, CommandSerializer, FixedClock, RawRequest};
    use crate::registry::lookup;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn line(name: &str, body: &str) -> SerializedLine {
        let raw = RawRequest::from_body(body.as_bytes()).unwrap();
        let command = normalize(lookup(name).unwrap(), &raw).unwrap();
        CommandSerializer::new(Arc::new(FixedClock(0))).serialize(&command)
    }

    #[tokio::test]
    async fn test_appends_without_truncating() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nagios.cmd");
        std::fs::write(&path, "EXISTING\n").unwrap();

        let writer = FileChannelWriter::new(&path);
        writer.write(&line("ENABLE_NOTIFICATIONS", "")).await.unwrap();
        writer
            .write(&line("ENABLE_HOST_CHECK", r#"{"Hostname":"web1"}"#))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "EXISTING\nENABLE_NOTIFICATIONS\nENABLE_HOST_CHECK;web1\n");
    }

    #[tokio::test]
    async fn test_missing_channel_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.cmd");

        let writer = FileChannelWriter::new(&path);
        let err = writer.write(&line("ENABLE_NOTIFICATIONS", "")).await.unwrap_err();
        assert_eq!(err.category(), "write");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_create_if_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.cmd");

        let writer = FileChannelWriter::new(&path)
            .create_if_missing(true)
            .serialize_writes(false);
        writer.write(&line("DISABLE_NOTIFICATIONS", "")).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "DISABLE_NOTIFICATIONS\n");
        assert_eq!(writer.describe(), format!("file:{}", path.display()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_cancelled_write_keeps_lock_until_append_finishes() {
        use std::time::Duration;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nagios.cmd");
        let status = std::process::Command::new("mkfifo").arg(&path).status().unwrap();
        assert!(status.success());

        let writer = FileChannelWriter::new(&path);
        let lock = Arc::clone(writer.lock.as_ref().unwrap());

        // With no reader the open blocks, so the request is dropped mid-append
        let enable = line("ENABLE_NOTIFICATIONS", "");
        let cancelled =
            tokio::time::timeout(Duration::from_millis(100), writer.write(&enable)).await;
        assert!(cancelled.is_err());
        assert!(lock.try_lock().is_err());

        let reader_path = path.clone();
        let received = tokio::task::spawn_blocking(move || std::fs::read_to_string(reader_path))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received, "ENABLE_NOTIFICATIONS\n");

        let mut released = false;
        for _ in 0..100 {
            if lock.try_lock().is_ok() {
                released = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert!(released);
    }

    #[tokio::test]
    async fn test_concurrent_writes_keep_lines_whole() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nagios.cmd");
        std::fs::write(&path, "").unwrap();

        let writer = Arc::new(FileChannelWriter::new(&path));
        let mut tasks = Vec::new();
        for i in 0..32 {
            let writer = Arc::clone(&writer);
            let line = line(
                "ADD_HOST_COMMENT",
                &format!(r#"{{"Hostname":"web{}","Author":"ops","Comment":"note {}"}}"#, i, i),
            );
            tasks.push(tokio::spawn(async move { writer.write(&line).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 32);
        for l in lines {
            assert!(l.starts_with("ADD_HOST_COMMENT;web"));
            assert_eq!(l.split(';').count(), 5);
        }
    }
}
