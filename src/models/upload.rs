use bytes::Bytes;
use mime_guess::Mime;
use reqwest::Url;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// A file picked for upload, held in memory until the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: Mime,
    pub bytes: Bytes,
    /// Canonical source path when the upload was read from disk.
    pub path: Option<PathBuf>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name).first_or_octet_stream();

        Self {
            file_name,
            mime,
            bytes: bytes.into(),
            path: None,
        }
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = tokio::fs::canonicalize(path.as_ref()).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Validation(format!("{} has no usable file name", path.display()))
            })?;
        let bytes = tokio::fs::read(&path).await?;

        tracing::debug!("Read {} ({} bytes) for upload", path.display(), bytes.len());

        let mut upload = Self::new(file_name, bytes);
        upload.path = Some(path);
        Ok(upload)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn is_image(&self) -> bool {
        self.mime.type_() == mime_guess::mime::IMAGE
    }

    pub fn is_audio(&self) -> bool {
        self.mime.type_() == mime_guess::mime::AUDIO
    }

    /// Local URL an image preview can be rendered from.
    pub fn preview_url(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|path| Url::from_file_path(path).ok())
            .map(String::from)
    }
}
