//! Data model for the wine-quality preprocessing pipeline.
//!
//! - **enums**: provenance labels and schema policies
//! - **columns**: well-known column names and explicit column roles
//! - **options**: split options and the per-run configuration value
//! - **processing**: the summary returned by a completed run

pub mod columns;
pub mod enums;
pub mod options;
pub mod processing;

pub use columns::{ColumnRoles, PROVENANCE_COLUMN, TARGET_COLUMN};
pub use enums::{SchemaPolicy, WineType};
pub use options::{DEFAULT_RANDOM_STATE, DEFAULT_TEST_SIZE, PrepConfig, SplitOptions};
pub use processing::{PipelineSummary, SourceSummary};
