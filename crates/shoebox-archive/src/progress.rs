//! Progress reporting types for archive runs.

use std::path::PathBuf;

use shoebox_core::{ArchiveFailure, FailureKind};

/// Progress information for an ongoing archive run.
///
/// A snapshot is emitted once per successfully archived file.
#[derive(Debug, Clone)]
pub struct ArchiveProgress {
    /// Files successfully added across all archives so far.
    pub files_completed: usize,
    /// Regular files seen by the scan, including files that never
    /// reached a bucket because their timestamp could not be read.
    pub files_total: usize,
    /// Bytes of source data archived so far.
    pub bytes_archived: u64,
    /// The source file most recently added.
    pub current_source: Option<PathBuf>,
    /// The archive currently being written.
    pub current_archive: Option<PathBuf>,
    /// Failures encountered so far.
    pub failures: Vec<ArchiveFailure>,
}

impl ArchiveProgress {
    /// Create a new progress tracker for a run over `files_total` files.
    pub fn new(files_total: usize) -> Self {
        Self {
            files_completed: 0,
            files_total,
            bytes_archived: 0,
            current_source: None,
            current_archive: None,
            failures: Vec::new(),
        }
    }

    /// Get the progress as a percentage (0.0 to 100.0).
    ///
    /// The denominator counts every regular file the scan saw, so a file
    /// whose timestamp could not be read keeps the result below 100% for
    /// the whole run. That reflects what the run actually achieved and
    /// is deliberate.
    pub fn percentage(&self) -> f64 {
        if self.files_total > 0 {
            (self.files_completed as f64 / self.files_total as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Check if the run has recorded any failures.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Add a failure to the progress.
    pub fn add_failure(&mut self, failure: ArchiveFailure) {
        self.failures.push(failure);
    }

    /// Record one successfully archived file.
    pub fn complete_file(&mut self, source: PathBuf, bytes: u64) {
        self.files_completed += 1;
        self.bytes_archived += bytes;
        self.current_source = Some(source);
    }
}

/// Result of a completed archive run.
///
/// Completion means the run finished, not that it was error-free; the
/// caller decides whether accumulated failures amount to an overall
/// failure.
#[derive(Debug, Clone, Default)]
pub struct ArchiveComplete {
    /// Number of files successfully archived.
    pub succeeded: usize,
    /// Number of files that failed or were skipped with their bucket.
    pub failed: usize,
    /// Total bytes of source data archived.
    pub bytes_archived: u64,
    /// Archives that were written, in the order they were created.
    pub archives: Vec<PathBuf>,
    /// Failures that occurred.
    pub failures: Vec<ArchiveFailure>,
}

impl ArchiveComplete {
    /// Summary for a run that died before producing results.
    pub fn aborted(message: impl Into<String>) -> Self {
        Self {
            failures: vec![ArchiveFailure::new(
                PathBuf::new(),
                message,
                FailureKind::Unexpected,
            )],
            ..Default::default()
        }
    }

    /// Check if the run was fully successful.
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.failures.is_empty()
    }

    /// Get a human-readable summary of the run.
    pub fn summary(&self) -> String {
        if self.failed == 0 {
            format!(
                "Archived {} file(s) into {} archive(s)",
                self.succeeded,
                self.archives.len()
            )
        } else {
            format!(
                "Archived {} file(s) into {} archive(s), {} failed",
                self.succeeded,
                self.archives.len(),
                self.failed
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_math() {
        let mut progress = ArchiveProgress::new(4);
        assert_eq!(progress.percentage(), 0.0);

        progress.complete_file(PathBuf::from("/in/a.jpg"), 100);
        assert_eq!(progress.percentage(), 25.0);

        progress.complete_file(PathBuf::from("/in/b.jpg"), 50);
        assert_eq!(progress.percentage(), 50.0);
        assert_eq!(progress.bytes_archived, 150);
    }

    #[test]
    fn test_percentage_with_no_files() {
        let progress = ArchiveProgress::new(0);
        assert_eq!(progress.percentage(), 0.0);
    }

    #[test]
    fn test_unreadable_file_caps_percentage_below_100() {
        // Three files scanned, one of which never reached a bucket.
        let mut progress = ArchiveProgress::new(3);
        progress.complete_file(PathBuf::from("/in/a.jpg"), 1);
        progress.complete_file(PathBuf::from("/in/b.jpg"), 1);

        assert!(progress.percentage() < 100.0);
    }

    #[test]
    fn test_summary() {
        let complete = ArchiveComplete {
            succeeded: 5,
            failed: 0,
            bytes_archived: 1024,
            archives: vec![PathBuf::from("/out/2024-01.zip")],
            failures: Vec::new(),
        };
        assert!(complete.is_success());
        assert_eq!(complete.summary(), "Archived 5 file(s) into 1 archive(s)");

        let complete = ArchiveComplete {
            failed: 2,
            ..complete
        };
        assert!(!complete.is_success());
        assert!(complete.summary().ends_with("2 failed"));
    }

    #[test]
    fn test_aborted_run() {
        let complete = ArchiveComplete::aborted("worker panicked");
        assert!(!complete.is_success());
        assert_eq!(complete.failures.len(), 1);
        assert_eq!(complete.failures[0].kind, FailureKind::Unexpected);
    }
}
