use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tracing::{debug, warn};
use uuid::Uuid;

/// A file the transport layer wrote to disk for the duration of one request.
///
/// Extractors only read it; the answering pipeline removes it once the
/// answer is resolved. The path is removed on drop as well, so a cancelled
/// request does not leave the upload behind.
#[derive(Debug)]
pub struct UploadedFile {
    path: TempPath,
}

impl UploadedFile {
    /// Take ownership of an existing file; it is removed when this value drops.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: TempPath::from_path(path),
        }
    }

    /// Write an upload into `dir` under a fresh name.
    ///
    /// The extension of `original_name` is kept because the tabular extractor
    /// dispatches on it.
    pub async fn persist(
        dir: &Path,
        original_name: Option<&str>,
        bytes: &[u8],
    ) -> std::io::Result<Self> {
        let file_name = match original_name.and_then(upload_extension) {
            Some(ext) => format!("upload-{}.{}", Uuid::new_v4(), ext),
            None => format!("upload-{}", Uuid::new_v4()),
        };
        let path = dir.join(file_name);

        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "Stored uploaded file");

        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents as text; invalid UTF-8 is replaced rather than rejected.
    pub async fn read_text(&self) -> std::io::Result<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Delete the file. Failure is logged, never returned.
    pub async fn discard(self) {
        let path = self.path.to_path_buf();
        if let Err(e) = self.path.close() {
            warn!(error = %e, path = %path.display(), "Error deleting temp file");
        }
    }
}

/// Extension of an uploaded file name, if it is a plain alphanumeric one.
fn upload_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_string())
}
