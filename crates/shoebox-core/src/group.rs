//! Grouped scan results.

use std::path::PathBuf;
use std::time::SystemTime;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{FileWarning, MonthKey};

/// One regular file seen during the scan, with its resolved timestamp.
///
/// Ephemeral: records exist between the scan pass and the archive pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path of the source file.
    pub path: PathBuf,
    /// Resolved creation timestamp (see the scanner for the fallback
    /// order on platforms without a true creation time).
    pub created: SystemTime,
    /// Size in bytes.
    pub size: u64,
}

impl FileRecord {
    /// Create a new file record.
    pub fn new(path: impl Into<PathBuf>, created: SystemTime, size: u64) -> Self {
        Self {
            path: path.into(),
            created,
            size,
        }
    }

    /// Base file name used for the archive entry, with all directory
    /// components stripped.
    pub fn entry_name(&self) -> Option<String> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Files bucketed by year-month, plus scan accounting.
#[derive(Debug, Clone, Default)]
pub struct MonthGroups {
    /// Bucketed records keyed by year-month. Within a bucket, records
    /// keep directory iteration order.
    pub buckets: IndexMap<MonthKey, Vec<FileRecord>>,
    /// Regular files seen by the scan, including files whose timestamp
    /// could not be read and that therefore occupy no bucket.
    pub total_files: usize,
    /// Per-file warnings accumulated during the scan.
    pub warnings: Vec<FileWarning>,
}

impl MonthGroups {
    /// Create an empty group map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the bucket its creation month selects.
    pub fn insert(&mut self, record: FileRecord) {
        let key = MonthKey::from_timestamp(record.created);
        self.buckets.entry(key).or_default().push(record);
    }

    /// True when no bucket was produced — the "nothing to do" outcome
    /// after an empty directory or a scan where every file failed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct year-month buckets.
    pub fn month_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of files that landed in a bucket.
    pub fn grouped_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Total bytes across all bucketed files.
    pub fn grouped_bytes(&self) -> u64 {
        self.buckets
            .values()
            .flatten()
            .map(|record| record.size)
            .sum()
    }

    /// Sort buckets chronologically so archive order is deterministic
    /// across runs.
    pub fn sort_keys(&mut self) {
        self.buckets.sort_keys();
    }
}
