//! Lesson video storage on local disk, one file per lesson named by its id.

use std::path::{Path, PathBuf};

use axum::extract::multipart::Field;
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::server::error::AppError;

pub struct VideoService<'a> {
    dir: &'a Path,
}

impl<'a> VideoService<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    pub fn path(&self, lesson_id: i32) -> PathBuf {
        self.dir.join(lesson_id.to_string())
    }

    pub async fn exists(&self, lesson_id: i32) -> Result<bool, AppError> {
        Ok(fs::try_exists(self.path(lesson_id)).await?)
    }

    /// Streams an uploaded field to the lesson's video file, replacing any previous video.
    ///
    /// The upload is written to a temporary file next to the video and moved into place
    /// once the whole field has been read, so a broken upload leaves the previous video.
    ///
    /// # Returns
    /// - `Ok(bytes)` - Size of the stored video
    pub async fn store(&self, lesson_id: i32, field: Field<'_>) -> Result<u64, AppError> {
        fs::create_dir_all(self.dir).await?;

        let partial = self
            .dir
            .join(format!(".{}.{}.part", lesson_id, Uuid::new_v4()));

        let written = match write_field(&partial, field).await {
            Ok(written) => written,
            Err(err) => {
                if let Err(cleanup) = fs::remove_file(&partial).await {
                    tracing::warn!(
                        "Failed to remove partial upload {}: {}",
                        partial.display(),
                        cleanup
                    );
                }
                return Err(err);
            }
        };

        fs::rename(&partial, self.path(lesson_id)).await?;

        tracing::info!("Stored video for lesson {} ({} bytes)", lesson_id, written);

        Ok(written)
    }

    pub async fn remove(&self, lesson_id: i32) -> Result<(), AppError> {
        match fs::remove_file(self.path(lesson_id)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

async fn write_field(path: &Path, mut field: Field<'_>) -> Result<u64, AppError> {
    let mut file = fs::File::create(path).await?;
    let mut written = 0u64;

    while let Some(chunk) = field.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}
