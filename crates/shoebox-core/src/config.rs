//! Run configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for one grouping-and-archiving run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RunConfig {
    /// Directory whose direct children are grouped and archived.
    pub input_dir: PathBuf,

    /// Directory that receives the monthly archives.
    pub output_dir: PathBuf,

    /// Include hidden files (starting with `.`).
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

impl RunConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.input_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err("Input directory cannot be empty".to_string());
            }
            None => return Err("Input directory is required".to_string()),
            _ => {}
        }
        match &self.output_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err("Output directory cannot be empty".to_string());
            }
            None => return Err("Output directory is required".to_string()),
            _ => {}
        }
        Ok(())
    }
}

impl RunConfig {
    /// Create a new run config builder.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Create a simple config for an input/output directory pair.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            include_hidden: true,
        }
    }

    /// Check if a file should be skipped as hidden.
    pub fn should_skip_hidden(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RunConfig::builder()
            .input_dir("/dcim/import")
            .output_dir("/archives")
            .include_hidden(false)
            .build()
            .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("/dcim/import"));
        assert_eq!(config.output_dir, PathBuf::from("/archives"));
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_config_simple() {
        let config = RunConfig::new("/in", "/out");
        assert_eq!(config.input_dir, PathBuf::from("/in"));
        assert!(config.include_hidden);
    }

    #[test]
    fn test_builder_rejects_missing_dirs() {
        assert!(RunConfig::builder().build().is_err());
        assert!(RunConfig::builder().input_dir("/in").build().is_err());
        assert!(
            RunConfig::builder()
                .input_dir("")
                .output_dir("/out")
                .build()
                .is_err()
        );
    }

    #[test]
    fn test_should_skip_hidden() {
        let mut config = RunConfig::new("/in", "/out");

        // By default, hidden files are included
        assert!(!config.should_skip_hidden(".thumbs"));

        config.include_hidden = false;
        assert!(config.should_skip_hidden(".thumbs"));
        assert!(!config.should_skip_hidden("IMG_0001.jpg"));
    }
}
