//! Error types for splitting and feature transformation.

use thiserror::Error;

/// Errors raised by the splitter and the column transformer.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Schema Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// A column assigned a numeric role holds non-numeric data.
    #[error("column '{column}' is not numeric (dtype {dtype})")]
    NonNumericColumn { column: String, dtype: String },

    /// A column was assigned more than one role.
    #[error("column '{column}' is assigned both numeric and binary roles")]
    ConflictingRoles { column: String },

    /// No column carries a role, so there is nothing to emit.
    #[error("no feature columns selected for transformation")]
    NoFeatureColumns,

    // === Split Errors ===
    /// Test fraction outside the open interval (0, 1).
    #[error("test_size must be strictly between 0 and 1, got {test_size}")]
    InvalidTestSize { test_size: f64 },

    /// The split would leave one partition without rows.
    #[error(
        "splitting {rows} rows leaves an empty partition (train={train_rows}, test={test_rows})"
    )]
    EmptyPartition {
        rows: usize,
        train_rows: usize,
        test_rows: usize,
    },

    /// Feature and target row counts disagree.
    #[error("features have {features} rows but target has {target}")]
    TargetLengthMismatch { features: usize, target: usize },

    // === Encoding Errors ===
    /// A categorical column had no non-null values to learn categories from.
    #[error("column '{column}' has no categories to encode")]
    EmptyCategories { column: String },

    /// A value outside the fitted category set was seen at transform time.
    #[error("unknown category '{value}' in column '{column}'")]
    UnknownCategory { column: String, value: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::UnknownCategory {
            column: "wine_type".to_string(),
            value: "rose_wine".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown category 'rose_wine' in column 'wine_type'"
        );
    }

    #[test]
    fn test_empty_partition_display() {
        let err = TransformError::EmptyPartition {
            rows: 2,
            train_rows: 2,
            test_rows: 0,
        };
        assert_eq!(
            err.to_string(),
            "splitting 2 rows leaves an empty partition (train=2, test=0)"
        );
    }
}
