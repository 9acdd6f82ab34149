use std::time::SystemTime;

use chrono::{Local, TimeZone};

use shoebox_core::{
    ArchiveFailure, FailureKind, FileRecord, FileWarning, MonthGroups, MonthKey, RunConfig,
    WarningKind,
};

fn timestamp(year: i32, month: u32, day: u32) -> SystemTime {
    Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap()
        .into()
}

#[test]
fn test_month_key_round_trip_through_record() {
    let record = FileRecord::new("/in/IMG_0001.jpg", timestamp(2024, 6, 3), 1024);
    let key = MonthKey::from_timestamp(record.created);

    assert_eq!(key, MonthKey::new(2024, 6));
    assert_eq!(key.to_string(), "2024-06");
    assert_eq!(key.archive_name(), "2024-06.zip");
}

#[test]
fn test_every_inserted_record_lands_in_exactly_one_bucket() {
    let mut groups = MonthGroups::new();
    for day in 1..=9 {
        groups.insert(FileRecord::new(
            format!("/in/file{day}.jpg"),
            timestamp(2024, 1 + day % 3, day),
            64,
        ));
        groups.total_files += 1;
    }

    assert_eq!(groups.grouped_count(), groups.total_files);
    assert_eq!(groups.month_count(), 3);

    let bucketed: usize = groups.buckets.values().map(Vec::len).sum();
    assert_eq!(bucketed, 9);
}

#[test]
fn test_warned_file_counts_but_never_buckets() {
    let mut groups = MonthGroups::new();
    groups.insert(FileRecord::new("/in/ok.jpg", timestamp(2024, 2, 1), 10));
    groups.total_files += 1;

    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    groups
        .warnings
        .push(FileWarning::timestamp_error("/in/bad.jpg", &io));
    groups.total_files += 1;

    assert_eq!(groups.total_files, 2);
    assert_eq!(groups.grouped_count(), 1);
    assert_eq!(groups.warnings.len(), 1);
    assert_eq!(groups.warnings[0].kind, WarningKind::TimestampError);
}

#[test]
fn test_config_defaults_and_validation() {
    let config = RunConfig::new("/in", "/out");
    assert!(config.include_hidden);

    let built = RunConfig::builder()
        .input_dir("/in")
        .output_dir("/out")
        .build()
        .unwrap();
    assert_eq!(built.input_dir, config.input_dir);

    assert!(RunConfig::builder().output_dir("/out").build().is_err());
}

#[test]
fn test_failure_kinds() {
    let bucket_level = ArchiveFailure::create_archive("/out/2024-01.zip", "disk full");
    assert_eq!(bucket_level.kind, FailureKind::CreateArchive);

    let file_level = ArchiveFailure::add_file("/in/a.jpg", "read failed");
    assert_eq!(file_level.kind, FailureKind::AddFile);
    assert!(file_level.to_string().contains("a.jpg"));
}
