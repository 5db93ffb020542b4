//! Seeded train/test splitting.
//!
//! A permutation of the row positions is drawn from a PRNG seeded with
//! `random_state`. The first `round(test_size * n)` permuted positions form
//! the test partition and the rest form the training partition. Both
//! partitions keep permutation order, so the training frame is shuffled.

use std::time::Instant;

use polars::prelude::{DataFrame, IdxCa, IdxSize, Series};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;
use wine_model::SplitOptions;

use crate::error::{Result, TransformError};

/// Row positions of each partition, in permutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Features and target of both partitions.
///
/// The test side is produced for completeness; the pipeline only consumes
/// the training side.
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub x_train: DataFrame,
    pub x_test: DataFrame,
    pub y_train: Series,
    pub y_test: Series,
}

/// Draw the train/test row partition for a table of `n_rows`.
///
/// # Errors
///
/// - [`TransformError::InvalidTestSize`] unless `0 < test_size < 1`
/// - [`TransformError::EmptyPartition`] if either partition would be empty
pub fn train_test_indices(n_rows: usize, options: &SplitOptions) -> Result<SplitIndices> {
    let test_size = options.test_size;
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(TransformError::InvalidTestSize { test_size });
    }

    let test_rows = options.test_rows(n_rows).min(n_rows);
    let train_rows = n_rows - test_rows;
    if test_rows == 0 || train_rows == 0 {
        return Err(TransformError::EmptyPartition {
            rows: n_rows,
            train_rows,
            test_rows,
        });
    }

    let mut permutation: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(options.random_state);
    permutation.shuffle(&mut rng);
    let train = permutation.split_off(test_rows);

    Ok(SplitIndices {
        train,
        test: permutation,
    })
}

fn index_array(positions: &[usize]) -> IdxCa {
    let indices: Vec<IdxSize> = positions.iter().map(|&idx| idx as IdxSize).collect();
    IdxCa::from_vec("idx".into(), indices)
}

/// Split `df` into training and test partitions and separate `target_column`.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] if the target is absent, plus
/// the errors of [`train_test_indices`].
pub fn split_for_train_test(
    df: &DataFrame,
    target_column: &str,
    options: &SplitOptions,
) -> Result<TrainTestSplit> {
    if df.column(target_column).is_err() {
        return Err(TransformError::ColumnNotFound {
            column: target_column.to_string(),
        });
    }
    let start = Instant::now();

    let indices = train_test_indices(df.height(), options)?;
    let train = df.take(&index_array(&indices.train))?;
    let test = df.take(&index_array(&indices.test))?;

    let y_train = train.column(target_column)?.as_materialized_series().clone();
    let y_test = test.column(target_column)?.as_materialized_series().clone();
    let x_train = train.drop(target_column)?;
    let x_test = test.drop(target_column)?;

    info!(
        rows = df.height(),
        train_rows = x_train.height(),
        test_rows = x_test.height(),
        test_size = options.test_size,
        random_state = options.random_state,
        duration_ms = start.elapsed().as_millis(),
        "split complete"
    );

    Ok(TrainTestSplit {
        x_train,
        x_test,
        y_train,
        y_test,
    })
}
