//! Run Settings
//! User settings for one analysis run.

use crate::error::{AnalysisError, Result};
use std::path::PathBuf;

pub const DEFAULT_TOP_N: usize = 15;

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub input: PathBuf,
    pub top_n: usize,
    pub output_dir: PathBuf,
    pub pretty_json: bool,
}

impl RunSettings {
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            top_n: DEFAULT_TOP_N,
            output_dir: output_dir.into(),
            pretty_json: true,
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Fail before any work if the input is absent or the output is a file.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(AnalysisError::InputNotFound(self.input.clone()));
        }
        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(AnalysisError::OutputNotDirectory(self.output_dir.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RunSettings::new(dir.path().join("nope.csv"), dir.path().join("out"));
        assert!(matches!(
            settings.validate(),
            Err(AnalysisError::InputNotFound(_))
        ));
    }

    #[test]
    fn validate_rejects_file_as_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("movies.csv");
        std::fs::write(&input, "id\n").unwrap();

        let settings = RunSettings::new(&input, &input).with_top_n(3);
        assert_eq!(settings.top_n, 3);
        assert!(matches!(
            settings.validate(),
            Err(AnalysisError::OutputNotDirectory(_))
        ));

        let ok = RunSettings::new(&input, dir.path().join("report"));
        assert!(ok.validate().is_ok());
        assert_eq!(ok.top_n, DEFAULT_TOP_N);
    }
}
