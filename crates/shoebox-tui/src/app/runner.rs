//! Background archive runs.

use tokio::sync::mpsc;

use shoebox_archive::{ArchiveComplete, ArchiveProgress, ArchiveResult, start_archive};
use shoebox_core::RunConfig;
use shoebox_scan::MonthScanner;

use super::RUN_CHANNEL_SIZE;

/// Severity of an on-screen log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Message from a background run to the UI.
#[derive(Debug)]
pub enum RunMessage {
    /// A line for the on-screen log.
    Log(LogLevel, String),
    /// Progress after a file was archived.
    Progress(ArchiveProgress),
    /// The run finished, successfully or not.
    Finished(ArchiveComplete),
    /// The run could not start or its worker died.
    Failed(String),
}

/// Start a full scan-then-archive run in the background.
///
/// Returns a receiver that will receive log lines, per-file progress
/// updates, and a terminal [`RunMessage::Finished`] or
/// [`RunMessage::Failed`].
pub fn start_run(config: RunConfig) -> mpsc::Receiver<RunMessage> {
    let (tx, rx) = mpsc::channel(RUN_CHANNEL_SIZE);

    tokio::spawn(async move {
        // Run the scan in a blocking task; it is pure filesystem I/O.
        let scan_config = config.clone();
        let scanned =
            tokio::task::spawn_blocking(move || MonthScanner::new().scan(&scan_config)).await;

        let groups = match scanned {
            Ok(Ok(groups)) => groups,
            Ok(Err(e)) => {
                let _ = tx.send(RunMessage::Failed(e.to_string())).await;
                return;
            }
            Err(e) => {
                let _ = tx
                    .send(RunMessage::Failed(format!("Scan worker failed: {e}")))
                    .await;
                return;
            }
        };

        for warning in &groups.warnings {
            let line = format!("{}: {}", warning.path.display(), warning.message);
            if tx.send(RunMessage::Log(LogLevel::Warn, line)).await.is_err() {
                return;
            }
        }

        if groups.is_empty() {
            let _ = tx
                .send(RunMessage::Log(
                    LogLevel::Info,
                    "No files found to archive".to_string(),
                ))
                .await;
            let _ = tx
                .send(RunMessage::Finished(ArchiveComplete::default()))
                .await;
            return;
        }

        let _ = tx
            .send(RunMessage::Log(
                LogLevel::Info,
                format!(
                    "Found {} file(s) across {} month(s)",
                    groups.grouped_count(),
                    groups.month_count()
                ),
            ))
            .await;

        let mut archive_rx = start_archive(groups, config.output_dir.clone());
        while let Some(result) = archive_rx.recv().await {
            let message = match result {
                ArchiveResult::Progress(progress) => RunMessage::Progress(progress),
                ArchiveResult::Complete(complete) => RunMessage::Finished(complete),
            };
            if tx.send(message).await.is_err() {
                break;
            }
        }
    });

    rx
}
