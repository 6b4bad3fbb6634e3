use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use axum::body::Bytes;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::{error, info};

pub mod form;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Routes a declared MIME type to its media directory.
    pub fn classify(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Image => "images",
            MediaKind::Video => "videos",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

#[derive(Debug)]
pub struct UploadedFile {
    pub kind: MediaKind,
    pub original_name: String,
    pub bytes: Bytes,
}

/// Upload root holding one directory per [`MediaKind`].
#[derive(Clone, Debug)]
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

    pub fn path(&self, kind: MediaKind, filename: &str) -> PathBuf {
        self.root.join(kind.dir_name()).join(filename)
    }

    pub async fn ensure_dirs(&self) -> anyhow::Result<()> {
        for kind in [MediaKind::Image, MediaKind::Video] {
            let dir = self.root.join(kind.dir_name());
            tokio::fs::create_dir_all(&dir)
                .await
                .with_context(|| {
                    format!("failed to create {}", dir.display())
                })?;
        }

        Ok(())
    }

    /// Writes the file as `<unix millis>.<ext>` and returns the stored name.
    pub async fn save(&self, file: &UploadedFile) -> anyhow::Result<String> {
        let mut timestamp = chrono::Utc::now().timestamp_millis();

        loop {
            let filename = stored_name(timestamp, &file.original_name);
            let path = self.path(file.kind, &filename);

            match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut handle) => {
                    handle
                        .write_all(&file.bytes)
                        .await
                        .with_context(|| {
                            format!("failed to write {}", path.display())
                        })?;
                    handle.flush().await?;

                    info!(
                        task = "store media",
                        kind = %file.kind,
                        filename = filename,
                        size = file.bytes.len()
                    );

                    return Ok(filename);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    timestamp += 1;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("failed to create {}", path.display())
                    });
                }
            }
        }
    }

    /// Best-effort unlink. A missing file is fine, other failures are only
    /// logged.
    pub async fn remove(&self, kind: MediaKind, filename: &str) {
        let path = self.path(kind, filename);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(task = "remove media", kind = %kind, filename = filename)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => error!(
                task = "remove media",
                path = %path.display(),
                error = e.to_string()
            ),
        }
    }
}

pub fn stored_name(timestamp: i64, original_name: &str) -> String {
    match extension(original_name) {
        Some(ext) => format!("{}.{}", timestamp, ext),
        None => timestamp.to_string(),
    }
}

fn extension(original_name: &str) -> Option<&str> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
}
