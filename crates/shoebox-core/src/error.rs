//! Error and warning types for scanning and archiving.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a scan before any grouping happens.
///
/// Everything here concerns the input directory itself; problems with
/// individual files become [`FileWarning`]s instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Input path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl ScanError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of per-file scan warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Error reading file metadata.
    MetadataError,
    /// Creation timestamp could not be resolved.
    TimestampError,
    /// Error reading a directory entry.
    ReadError,
}

/// Non-fatal warning for a single file encountered during the scan.
///
/// A warned file is skipped, never bucketed, and the scan continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWarning {
    /// Path where the warning occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl FileWarning {
    /// Create a new file warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a metadata read warning.
    pub fn metadata_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self::new(
            path,
            format!("Metadata error: {error}"),
            WarningKind::MetadataError,
        )
    }

    /// Create a timestamp resolution warning.
    pub fn timestamp_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self::new(
            path,
            format!("Timestamp unavailable: {error}"),
            WarningKind::TimestampError,
        )
    }

    /// Create a directory entry read warning.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        Self::new(path, format!("Read error: {error}"), WarningKind::ReadError)
    }
}

/// What part of archive writing failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The archive file itself could not be created or finalized; the
    /// whole bucket is affected.
    CreateArchive,
    /// One file could not be added to an otherwise healthy archive.
    AddFile,
    /// The run itself died unexpectedly.
    Unexpected,
}

/// A recoverable failure recorded while writing archives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveFailure {
    /// The path that caused the failure (source file or archive).
    pub path: PathBuf,
    /// A human-readable message.
    pub message: String,
    /// Kind of failure.
    pub kind: FailureKind,
}

impl ArchiveFailure {
    /// Create a new archive failure.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: FailureKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create an archive-level failure.
    pub fn create_archive(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(path, message, FailureKind::CreateArchive)
    }

    /// Create a per-file failure.
    pub fn add_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(path, message, FailureKind::AddFile)
    }
}

impl std::fmt::Display for ArchiveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_io_classification() {
        let err = ScanError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ScanError::PermissionDenied { .. }));

        let err = ScanError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[test]
    fn test_file_warning_creation() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let warning = FileWarning::metadata_error("/test/file", &io);
        assert_eq!(warning.kind, WarningKind::MetadataError);
        assert!(warning.message.contains("boom"));
    }

    #[test]
    fn test_archive_failure_display() {
        let failure = ArchiveFailure::add_file("/in/photo.jpg", "disk full");
        assert_eq!(failure.kind, FailureKind::AddFile);
        assert_eq!(failure.to_string(), "/in/photo.jpg: disk full");
    }
}
