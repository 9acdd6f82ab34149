//! Zip container writing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

use shoebox_core::{ArchiveFailure, FileRecord};

use crate::progress::ArchiveProgress;

/// Write one bucket's files into the archive at `dest`.
///
/// Entries are stored deflate-compressed under their base name only.
/// When two records share a base name both entries are written; zip
/// readers resolve the name to the later entry, so the collision is a
/// deterministic last-wins. A file that cannot be added is recorded on
/// `progress` and the rest of the bucket is still written; only errors
/// creating or finalizing the archive itself are returned.
pub fn write_bucket(
    dest: &Path,
    records: &[FileRecord],
    progress: &mut ArchiveProgress,
    on_progress: &mut dyn FnMut(&ArchiveProgress),
) -> Result<(), String> {
    let file = File::create(dest).map_err(|e| format!("Failed to create archive: {e}"))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for record in records {
        let Some(name) = record.entry_name() else {
            progress.add_failure(ArchiveFailure::add_file(
                &record.path,
                "Source path has no file name",
            ));
            continue;
        };

        match add_entry(&mut zip, &name, record, options) {
            Ok(()) => {
                debug!(source = %record.path.display(), archive = %dest.display(), "archived file");
                progress.complete_file(record.path.clone(), record.size);
                on_progress(progress);
            }
            Err(e) => {
                warn!(path = %record.path.display(), error = %e, "failed to add file to archive");
                progress.add_failure(ArchiveFailure::add_file(&record.path, e));
            }
        }
    }

    let mut inner = zip
        .finish()
        .map_err(|e| format!("Failed to finalize archive: {e}"))?;
    inner
        .flush()
        .map_err(|e| format!("Failed to finalize archive: {e}"))?;
    Ok(())
}

/// Add a single file under `name`, streaming its contents into the
/// archive.
fn add_entry(
    zip: &mut ZipWriter<BufWriter<File>>,
    name: &str,
    record: &FileRecord,
    options: SimpleFileOptions,
) -> Result<(), String> {
    let mut source = File::open(&record.path).map_err(|e| format!("Failed to open source: {e}"))?;
    zip.start_file(name, options)
        .map_err(|e| format!("Failed to start entry: {e}"))?;
    io::copy(&mut source, zip).map_err(|e| format!("Failed to write entry: {e}"))?;
    Ok(())
}
