//! Delivery of exported CSV bytes as a local file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::core::StockError;

/// Where exported files end up. The browser's download prompt in a web host,
/// a directory on disk in [`DirectorySink`].
pub trait DownloadSink: Send + Sync {
    /// Stores `bytes` under `file_name` and returns where it went.
    fn save<'a>(
        &'a self,
        file_name: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<PathBuf, StockError>>;
}

impl<T: DownloadSink + ?Sized> DownloadSink for Arc<T> {
    fn save<'a>(
        &'a self,
        file_name: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<PathBuf, StockError>> {
        (**self).save(file_name, bytes)
    }
}

/// Writes downloads into a directory, creating it on first use.
/// An existing file with the same name is overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn save<'a>(
        &'a self,
        file_name: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<PathBuf, StockError>> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.dir).await?;
            let path = self.dir.join(sanitize_file_name(file_name));
            tokio::fs::write(&path, bytes).await?;
            Ok::<_, StockError>(path)
        })
    }
}

/// Keeps the name a single path component.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect()
}
