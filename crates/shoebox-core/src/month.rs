//! Year-month bucket keys.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// Year-month bucket key, rendered as `YYYY-MM`.
///
/// Keys are derived from a file's creation timestamp in the local
/// timezone, so grouping matches what a user sees in their file manager.
/// The derived ordering is chronological (year first, then month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    /// Four-digit year.
    pub year: i32,
    /// Month, 1 through 12.
    pub month: u32,
}

impl MonthKey {
    /// Create a key from raw parts.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Derive the key for a timestamp, using the local timezone.
    pub fn from_timestamp(ts: SystemTime) -> Self {
        let dt: DateTime<Local> = ts.into();
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }

    /// File name of the primary archive for this key.
    pub fn archive_name(&self) -> String {
        format!("{self}.zip")
    }

    /// File name of the `n`-th fallback archive, used when the primary
    /// name is already taken.
    pub fn numbered_archive_name(&self, n: u32) -> String {
        format!("{self}_{n}.zip")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(MonthKey::new(2024, 3).to_string(), "2024-03");
        assert_eq!(MonthKey::new(2024, 12).to_string(), "2024-12");
        assert_eq!(MonthKey::new(987, 5).to_string(), "0987-05");
    }

    #[test]
    fn test_archive_names() {
        let key = MonthKey::new(2023, 7);
        assert_eq!(key.archive_name(), "2023-07.zip");
        assert_eq!(key.numbered_archive_name(2), "2023-07_2.zip");
    }

    #[test]
    fn test_from_timestamp() {
        let dt = Local.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
        let key = MonthKey::from_timestamp(dt.into());
        assert_eq!(key, MonthKey::new(2024, 3));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys = vec![
            MonthKey::new(2024, 1),
            MonthKey::new(2023, 12),
            MonthKey::new(2024, 2),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                MonthKey::new(2023, 12),
                MonthKey::new(2024, 1),
                MonthKey::new(2024, 2),
            ]
        );
    }
}
