//! Archive run driver.

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tracing::{error, info};

use shoebox_core::{ArchiveFailure, MonthGroups};

use crate::ARCHIVE_CHANNEL_SIZE;
use crate::naming::next_archive_path;
use crate::progress::{ArchiveComplete, ArchiveProgress};
use crate::writer::write_bucket;

/// Result sent through the channel during archive runs.
#[derive(Debug)]
pub enum ArchiveResult {
    /// Progress update after a file was added.
    Progress(ArchiveProgress),
    /// The run completed, possibly with recorded failures.
    Complete(ArchiveComplete),
}

/// Write one archive per bucket, synchronously.
///
/// `on_progress` fires once per successfully added file, carrying the
/// source path and the archive it went into. The run never aborts on
/// recoverable problems: a file that cannot be added is recorded and
/// skipped, and a bucket whose archive cannot be created is recorded and
/// skipped wholesale. The returned summary reflects everything that
/// happened.
pub fn archive_groups(
    groups: &MonthGroups,
    output_dir: &Path,
    mut on_progress: impl FnMut(&ArchiveProgress),
) -> ArchiveComplete {
    let mut progress = ArchiveProgress::new(groups.total_files);
    let mut archives = Vec::new();
    let mut failed = 0usize;

    for (key, records) in &groups.buckets {
        let dest = next_archive_path(output_dir, key);
        info!(archive = %dest.display(), files = records.len(), "writing monthly archive");
        progress.current_archive = Some(dest.clone());

        let before = progress.files_completed;
        match write_bucket(&dest, records, &mut progress, &mut on_progress) {
            Ok(()) => archives.push(dest),
            Err(message) => {
                error!(archive = %dest.display(), error = %message, "archive failed");
                progress.add_failure(ArchiveFailure::create_archive(&dest, message));
            }
        }
        failed += records.len() - (progress.files_completed - before);
    }

    ArchiveComplete {
        succeeded: progress.files_completed,
        failed,
        bytes_archived: progress.bytes_archived,
        archives,
        failures: progress.failures,
    }
}

/// Start an archive run on a background blocking task.
///
/// Returns a receiver yielding one [`ArchiveResult::Progress`] per
/// archived file and a final [`ArchiveResult::Complete`] once every
/// bucket has been processed.
pub fn start_archive(groups: MonthGroups, output_dir: PathBuf) -> mpsc::Receiver<ArchiveResult> {
    let (tx, rx) = mpsc::channel(ARCHIVE_CHANNEL_SIZE);

    tokio::spawn(async move {
        let progress_tx = tx.clone();
        let result = tokio::task::spawn_blocking(move || {
            archive_groups(&groups, &output_dir, |progress| {
                let _ = progress_tx.blocking_send(ArchiveResult::Progress(progress.clone()));
            })
        })
        .await;

        match result {
            Ok(complete) => {
                let _ = tx.send(ArchiveResult::Complete(complete)).await;
            }
            Err(e) => {
                error!(error = %e, "archive worker failed");
                let _ = tx
                    .send(ArchiveResult::Complete(ArchiveComplete::aborted(
                        e.to_string(),
                    )))
                    .await;
            }
        }
    });

    rx
}
