use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::common::MediaError;

/// Public URL prefix the stored objects are served under.
pub const MEDIA_URL_PREFIX: &str = "/media";

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Disk-backed object store for uploaded project images. Validation runs
/// before anything touches the filesystem, so a rejected upload performs
/// no writes at all.
#[derive(Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Checks the declared content type, the byte size, then the file
    /// extension. Each violation carries its own admin-facing message.
    pub fn validate(filename: &str, content_type: &str, size: usize) -> Result<(), MediaError> {
        if !content_type.starts_with("image/") {
            return Err(MediaError::NotAnImage);
        }

        if size > MAX_IMAGE_BYTES {
            return Err(MediaError::TooLarge);
        }

        if !ALLOWED_EXTENSIONS.contains(&Self::extension(filename).as_str()) {
            return Err(MediaError::UnsupportedType);
        }

        Ok(())
    }

    /// Stores validated bytes under a fresh collision-free name and
    /// returns the public URL.
    pub async fn store(
        &self,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, MediaError> {
        Self::validate(filename, content_type, bytes.len())?;

        tokio::fs::create_dir_all(&self.root).await?;

        let stored_name = format!("{}.{}", Uuid::new_v4(), Self::extension(filename));
        tokio::fs::write(self.root.join(&stored_name), bytes).await?;

        Ok(format!("{}/{}", MEDIA_URL_PREFIX, stored_name))
    }

    /// Best-effort removal by public URL. URLs outside this store (a
    /// typed-in remote image) are left alone.
    pub async fn remove(&self, url: &str) -> Result<bool, MediaError> {
        let Some(name) = url.strip_prefix(MEDIA_URL_PREFIX).and_then(|s| s.strip_prefix('/'))
        else {
            return Ok(false);
        };

        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Ok(false);
        }

        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn extension(filename: &str) -> String {
        Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase()
    }
}
