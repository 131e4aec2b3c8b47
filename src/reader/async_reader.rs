// src/reader/async_reader.rs
use crate::error::{BndlError, Result};
use crate::reader::{Container, DecodeOptions};
use std::io;
use std::path::Path;
use tokio::task;

/// Async constructors (requires "async" feature)
///
/// The decode itself stays blocking; it runs on tokio's blocking pool so a
/// caller can abort the task and drop the partial work.
impl Container {
    pub async fn open_async(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_async_with(path, DecodeOptions::default()).await
    }

    pub async fn open_async_with(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        task::spawn_blocking(move || Container::open_with(&path, &options))
            .await
            .map_err(|e| BndlError::Io(io::Error::new(io::ErrorKind::Other, e)))?
    }
}
