//! Wine feature transformation.
//!
//! This crate provides the splitter and transformer stages of the pipeline:
//!
//! - **split**: seeded train/test partitioning with target separation
//! - **roles**: dtype-driven inference of explicit column roles
//! - **scaler**: per-column standardization fitted on training data
//! - **encoder**: one-hot encoding that collapses binary features to one indicator
//! - **pipeline**: the column transformer combining scaler and encoder

pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod roles;
pub mod scaler;
pub mod split;

pub use encoder::{EncodedColumn, OneHotEncoder};
pub use error::{Result, TransformError};
pub use pipeline::{ColumnTransformer, FittedColumnTransformer, transform_with_pipeline};
pub use roles::infer_column_roles;
pub use scaler::{ColumnScale, StandardScaler};
pub use split::{SplitIndices, TrainTestSplit, split_for_train_test, train_test_indices};
