//! File and network collaborators around [`MapDocument`].

mod atomic;
mod fetch;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::document::MapDocument;
use crate::error::MapError;

#[cfg(feature = "online")]
pub use fetch::HttpMapFetcher;
pub use fetch::{
    fetch_map_document, fetch_map_markup, fetch_map_records, MapFetcher, FLASH_ACCEPT,
    FLASH_USER_AGENT, FLASH_VERSION, MAP_SERVER_URL,
};

#[derive(Debug, Error)]
pub enum MapIoError {
    #[error("map file not found: {path}")]
    NotFound { path: PathBuf },
    #[error("permission denied for map file: {path}")]
    PermissionDenied { path: PathBuf },
    #[error("expected a map file but found a directory: {path}")]
    IsDirectory { path: PathBuf },
    #[error("map file {path} is not valid UTF-8 (first bad byte at offset {valid_up_to})")]
    Decode { path: PathBuf, valid_up_to: usize },
    #[error("failed to access map file {path}: {source}")]
    Other {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to fetch map '{map_id}': {source}")]
    Network {
        map_id: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("map server {endpoint} answered HTTP {status} for map '{map_id}'")]
    HttpStatus {
        map_id: String,
        endpoint: String,
        status: u16,
    },
    #[error("failed to set up the map server client: {source}")]
    ClientSetup {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MapIoError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        let path = path.to_path_buf();
        match error.kind() {
            io::ErrorKind::NotFound => MapIoError::NotFound { path },
            io::ErrorKind::PermissionDenied => MapIoError::PermissionDenied { path },
            _ if path.is_dir() => MapIoError::IsDirectory { path },
            _ => MapIoError::Other {
                path,
                source: error,
            },
        }
    }
}

/// Reads a whole map file as UTF-8 text.
pub fn read_map_text(path: &Path) -> Result<String, MapIoError> {
    if path.is_dir() {
        return Err(MapIoError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|error| MapIoError::from_io(path, error))?;
    let text = String::from_utf8(bytes).map_err(|error| MapIoError::Decode {
        path: path.to_path_buf(),
        valid_up_to: error.utf8_error().valid_up_to(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "map_file_read");
    Ok(text)
}

/// Atomically replaces `path` with `text`, creating parent directories.
pub fn write_map_text(path: &Path, text: &str) -> Result<(), MapIoError> {
    if path.is_dir() {
        return Err(MapIoError::IsDirectory {
            path: path.to_path_buf(),
        });
    }
    atomic::write_map_atomic(path, text).map_err(|error| MapIoError::from_io(path, error))?;
    debug!(path = %path.display(), bytes = text.len(), "map_file_written");
    Ok(())
}

pub fn load_map_file(path: &Path) -> Result<MapDocument, MapError> {
    let text = read_map_text(path)?;
    MapDocument::import(&text)
}

pub fn dump_map_file(document: &MapDocument, path: &Path) -> Result<(), MapError> {
    let text = document.export()?;
    write_map_text(path, &text)?;
    Ok(())
}
