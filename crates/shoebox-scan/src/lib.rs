//! Directory scanning engine for shoebox.
//!
//! Scans one directory level, resolves each regular file's creation
//! timestamp, and partitions the files into year-month buckets ready for
//! archiving.

mod scanner;

pub use scanner::MonthScanner;
pub use shoebox_core::{MonthGroups, RunConfig, ScanError};
