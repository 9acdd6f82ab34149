//! Collision-free archive naming.

use std::path::{Path, PathBuf};

use shoebox_core::MonthKey;

/// Pick the archive path for a bucket, never reusing an existing file.
///
/// Tries `<dir>/<YYYY-MM>.zip` first, then `<dir>/<YYYY-MM>_1.zip`,
/// `_2.zip`, ... until an unused name is found. Probing happens once per
/// bucket, before the archive is opened.
pub fn next_archive_path(output_dir: &Path, key: &MonthKey) -> PathBuf {
    let primary = output_dir.join(key.archive_name());
    if !primary.exists() {
        return primary;
    }

    let mut n = 1u32;
    loop {
        let candidate = output_dir.join(key.numbered_archive_name(n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    #[test]
    fn test_fresh_directory_uses_primary_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = next_archive_path(dir.path(), &MonthKey::new(2024, 3));
        assert_eq!(path, dir.path().join("2024-03.zip"));
    }

    #[test]
    fn test_collision_probes_smallest_free_suffix() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("2024-03.zip")).unwrap();

        let path = next_archive_path(dir.path(), &MonthKey::new(2024, 3));
        assert_eq!(path, dir.path().join("2024-03_1.zip"));

        File::create(dir.path().join("2024-03_1.zip")).unwrap();
        let path = next_archive_path(dir.path(), &MonthKey::new(2024, 3));
        assert_eq!(path, dir.path().join("2024-03_2.zip"));
    }

    #[test]
    fn test_gap_in_suffixes_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("2024-03.zip")).unwrap();
        File::create(dir.path().join("2024-03_2.zip")).unwrap();

        // _1 is free, so it wins even though _2 exists.
        let path = next_archive_path(dir.path(), &MonthKey::new(2024, 3));
        assert_eq!(path, dir.path().join("2024-03_1.zip"));
    }
}
