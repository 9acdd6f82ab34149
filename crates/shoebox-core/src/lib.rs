//! Core types and traits for shoebox.
//!
//! This crate provides the fundamental data structures shared by the
//! scanner, the archiver and the shells: the run configuration, the
//! error/warning taxonomy, and the month-keyed bucket map.

mod config;
mod error;
mod group;
mod month;

pub use config::{RunConfig, RunConfigBuilder};
pub use error::{ArchiveFailure, FailureKind, FileWarning, ScanError, WarningKind};
pub use group::{FileRecord, MonthGroups};
pub use month::MonthKey;
