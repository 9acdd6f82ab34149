//! Archive writing engine for shoebox.
//!
//! This crate turns bucketed scan results into one deflate-compressed
//! zip archive per month, with progress reporting via channels,
//! following the same pattern as the scanning implementation.

mod archiver;
mod naming;
mod progress;
mod writer;

pub use archiver::{ArchiveResult, archive_groups, start_archive};
pub use naming::next_archive_path;
pub use progress::{ArchiveComplete, ArchiveProgress};
pub use shoebox_core::{ArchiveFailure, FailureKind};

/// Default channel buffer size for archive progress updates.
pub const ARCHIVE_CHANNEL_SIZE: usize = 100;
