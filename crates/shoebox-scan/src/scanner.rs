//! Single-level directory scanner.

use std::fs::{self, Metadata};
use std::io;
use std::time::SystemTime;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use tracing::{debug, warn};

use shoebox_core::{FileRecord, FileWarning, MonthGroups, RunConfig, ScanError};

/// Scanner that partitions a directory's regular files into monthly
/// buckets.
///
/// The scan is non-recursive: only direct children of the input
/// directory are considered, and anything that is not a regular file
/// (subdirectories, symlinks, sockets) is skipped without counting
/// toward the file total.
#[derive(Debug, Default)]
pub struct MonthScanner;

impl MonthScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scan the configured input directory.
    ///
    /// Per-file metadata failures become warnings on the result and the
    /// scan continues; only problems with the directory itself abort.
    /// Buckets come back sorted chronologically.
    pub fn scan(&self, config: &RunConfig) -> Result<MonthGroups, ScanError> {
        let root = &config.input_dir;
        let root_metadata = fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
        if !root_metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: root.clone() });
        }

        let mut groups = MonthGroups::new();

        let entries = fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // The entry could not even be named, so the warning
                    // is recorded against the directory.
                    warn!(path = %root.display(), error = %e, "failed to read directory entry");
                    groups.warnings.push(FileWarning::read_error(root, &e));
                    continue;
                }
            };

            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if config.should_skip_hidden(name) {
                    continue;
                }
            }

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read entry type");
                    groups.warnings.push(FileWarning::read_error(&path, &e));
                    continue;
                }
            };
            if !file_type.is_file() {
                debug!(path = %path.display(), "skipping non-regular entry");
                continue;
            }

            // A regular file counts toward the total whether or not its
            // timestamp resolves.
            groups.total_files += 1;

            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read file metadata");
                    groups.warnings.push(FileWarning::metadata_error(&path, &e));
                    continue;
                }
            };

            match resolve_created(&metadata) {
                Ok(created) => {
                    groups.insert(FileRecord::new(path, created, metadata.len()));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to resolve creation time");
                    groups.warnings.push(FileWarning::timestamp_error(&path, &e));
                }
            }
        }

        groups.sort_keys();
        debug!(
            files = groups.total_files,
            months = groups.month_count(),
            warnings = groups.warnings.len(),
            "scan finished"
        );
        Ok(groups)
    }
}

/// Resolve the best available creation timestamp for a file.
///
/// Fallback order: true creation time where the platform and filesystem
/// expose one, the inode change time on Unix, and finally the
/// modification time. On filesystems without birth time this means a
/// file can be grouped by the month of its last metadata change rather
/// than the month it came into existence.
fn resolve_created(metadata: &Metadata) -> io::Result<SystemTime> {
    match metadata.created() {
        Ok(created) => Ok(created),
        Err(_) => fallback_timestamp(metadata),
    }
}

#[cfg(unix)]
fn fallback_timestamp(metadata: &Metadata) -> io::Result<SystemTime> {
    use std::time::{Duration, UNIX_EPOCH};

    let secs = metadata.ctime();
    if secs >= 0 {
        Ok(UNIX_EPOCH + Duration::from_secs(secs as u64))
    } else {
        Ok(UNIX_EPOCH - Duration::from_secs(secs.unsigned_abs()))
    }
}

#[cfg(not(unix))]
fn fallback_timestamp(metadata: &Metadata) -> io::Result<SystemTime> {
    metadata.modified()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;
    use std::io::Write;

    use shoebox_core::MonthKey;

    fn touch(dir: &std::path::Path, name: &str, contents: &[u8]) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(contents).unwrap();
    }

    #[test]
    fn test_scan_groups_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg", b"aaa");
        touch(dir.path(), "b.jpg", b"bbbb");
        fs::create_dir(dir.path().join("subdir")).unwrap();
        touch(&dir.path().join("subdir"), "nested.jpg", b"ccc");

        let config = RunConfig::new(dir.path(), dir.path());
        let groups = MonthScanner::new().scan(&config).unwrap();

        // Fresh files land in the current month; the subdirectory and
        // its contents are invisible to the scan.
        assert_eq!(groups.total_files, 2);
        assert_eq!(groups.grouped_count(), 2);
        assert_eq!(groups.month_count(), 1);
        assert_eq!(groups.grouped_bytes(), 7);

        let key = MonthKey::from_timestamp(SystemTime::now());
        assert!(groups.buckets.contains_key(&key));
    }

    #[test]
    fn test_scan_empty_directory_is_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path(), dir.path());
        let groups = MonthScanner::new().scan(&config).unwrap();

        assert!(groups.is_empty());
        assert_eq!(groups.total_files, 0);
        assert!(groups.warnings.is_empty());
    }

    #[test]
    fn test_scan_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = RunConfig::new(dir.path().join("nope"), dir.path());
        let err = MonthScanner::new().scan(&config).unwrap_err();
        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[test]
    fn test_scan_rejects_file_as_input() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "not-a-dir", b"x");

        let config = RunConfig::new(dir.path().join("not-a-dir"), dir.path());
        let err = MonthScanner::new().scan(&config).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory { .. }));
    }

    #[test]
    fn test_scan_skips_hidden_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), ".hidden", b"x");
        touch(dir.path(), "visible.jpg", b"x");

        let mut config = RunConfig::new(dir.path(), dir.path());
        config.include_hidden = false;
        let groups = MonthScanner::new().scan(&config).unwrap();
        assert_eq!(groups.total_files, 1);

        config.include_hidden = true;
        let groups = MonthScanner::new().scan(&config).unwrap();
        assert_eq!(groups.total_files, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "real.jpg", b"x");
        std::os::unix::fs::symlink(dir.path().join("real.jpg"), dir.path().join("link.jpg"))
            .unwrap();

        let config = RunConfig::new(dir.path(), dir.path());
        let groups = MonthScanner::new().scan(&config).unwrap();

        assert_eq!(groups.total_files, 1);
        assert_eq!(groups.grouped_count(), 1);
    }
}
