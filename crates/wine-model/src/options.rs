//! Configuration options for a preprocessing run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::columns::{PROVENANCE_COLUMN, TARGET_COLUMN};
use crate::enums::SchemaPolicy;

/// Fraction of rows held out for the test partition.
pub const DEFAULT_TEST_SIZE: f64 = 0.2;

/// Seed for the train/test shuffle.
pub const DEFAULT_RANDOM_STATE: u64 = 123;

/// Options for the seeded train/test split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitOptions {
    /// Test fraction, strictly between 0 and 1.
    pub test_size: f64,
    /// Seed for the row permutation. Identical seeds give identical splits.
    pub random_state: u64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            test_size: DEFAULT_TEST_SIZE,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }
}

impl SplitOptions {
    pub fn new(test_size: f64, random_state: u64) -> Self {
        Self {
            test_size,
            random_state,
        }
    }

    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Number of test rows for a table of `n_rows`: `round(test_size * n_rows)`.
    pub fn test_rows(&self, n_rows: usize) -> usize {
        (self.test_size * n_rows as f64).round() as usize
    }
}

/// Everything a single preprocessing run needs.
///
/// Built once at the entry point and passed down to each stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Semicolon-delimited red-wine source.
    pub input_red: PathBuf,
    /// Semicolon-delimited white-wine source.
    pub input_white: PathBuf,
    /// Destination for the raw red snapshot and then the transformed table.
    pub out_file: PathBuf,
    /// Column held out as the prediction target.
    pub target_column: String,
    /// Columns one-hot encoded by the transformer.
    pub binary_columns: Vec<String>,
    pub split: SplitOptions,
    pub schema_policy: SchemaPolicy,
}

impl PrepConfig {
    pub fn new(
        input_red: impl Into<PathBuf>,
        input_white: impl Into<PathBuf>,
        out_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_red: input_red.into(),
            input_white: input_white.into(),
            out_file: out_file.into(),
            target_column: TARGET_COLUMN.to_string(),
            binary_columns: vec![PROVENANCE_COLUMN.to_string()],
            split: SplitOptions::default(),
            schema_policy: SchemaPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_split(mut self, split: SplitOptions) -> Self {
        self.split = split;
        self
    }

    #[must_use]
    pub fn with_schema_policy(mut self, policy: SchemaPolicy) -> Self {
        self.schema_policy = policy;
        self
    }
}
