use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::enums::WineType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSummary {
    pub wine_type: WineType,
    pub path: PathBuf,
    pub rows: usize,
}

/// Outcome of a completed preprocessing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub sources: Vec<SourceSummary>,
    pub combined_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub output_path: PathBuf,
    pub output_columns: Vec<String>,
}

impl PipelineSummary {
    /// Rows read across every source.
    pub fn input_rows(&self) -> usize {
        self.sources.iter().map(|source| source.rows).sum()
    }
}
