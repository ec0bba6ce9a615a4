//! Flat-file storage for generated audio.
//!
//! Files land in a single directory that is also served at `/audio`. Names are
//! `<prefix>_<unix millis>.mp3`; two requests finishing in the same
//! millisecond with the same prefix share a name and the later write wins.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::debug;

/// URL path under which stored audio is served
pub const AUDIO_URL_PREFIX: &str = "/audio";

const AUDIO_EXTENSION: &str = "mp3";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid audio filename: {0}")]
    InvalidFilename(String),
    #[error("Failed to create audio directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write audio file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A file written by [`AudioStore::store`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub path: PathBuf,
    pub filename: String,
}

impl StoredFile {
    /// Relative URL the file is served at.
    pub fn url(&self) -> String {
        AudioStore::public_url(&self.filename)
    }
}

/// Writes audio artifacts into the public audio directory.
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Build `<prefix>_<unix millis>.mp3` from the current wall clock.
    pub fn generate_filename(prefix: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!("{prefix}_{millis}.{AUDIO_EXTENSION}")
    }

    /// Relative URL for a stored filename.
    pub fn public_url(filename: &str) -> String {
        format!("{AUDIO_URL_PREFIX}/{filename}")
    }

    /// Write `audio` as `filename`, creating the directory if needed.
    ///
    /// Existing files with the same name are overwritten.
    pub async fn store(&self, audio: &[u8], filename: &str) -> StorageResult<StoredFile> {
        if !is_valid_filename(filename) {
            return Err(StorageError::InvalidFilename(filename.to_string()));
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.dir.join(filename);
        tokio::fs::write(&path, audio)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = audio.len(), "Stored audio file");

        Ok(StoredFile {
            path,
            filename: filename.to_string(),
        })
    }
}

fn is_valid_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
}
