//! Error types for the engine's collaborator boundaries.
//!
//! Geometry never fails: degenerate or out-of-bounds input is corrected in
//! place. Only persistence and settings I/O produce errors.

use crate::types::{Region, SurfaceId};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`RegionStore`](crate::store::RegionStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document could not be read or written as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Temporary file could not be moved over the store file
    #[error("Failed to persist region store to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Region with negative or non-finite values
    #[error("Invalid {surface} region: {region}")]
    InvalidRegion { surface: SurfaceId, region: Region },
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading, saving or watching engine settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// Setting outside its allowed range
    #[error("Invalid setting {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
