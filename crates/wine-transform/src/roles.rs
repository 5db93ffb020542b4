//! Column role inference.
//!
//! The transformer takes explicit [`ColumnRoles`]. This module derives them
//! from a feature frame the way the dataset has always been treated: every
//! numeric column is standardized, and the designated binary columns are
//! encoded.

use polars::prelude::DataFrame;
use wine_common::is_numeric_dtype;
use wine_model::ColumnRoles;

use crate::error::{Result, TransformError};

/// Infer roles from dtypes.
///
/// `numeric` receives every integer or float column in frame order, except
/// those named in `binary_columns`. `binary` receives `binary_columns` as
/// given.
///
/// # Errors
///
/// Returns [`TransformError::ColumnNotFound`] if a binary column is absent.
pub fn infer_column_roles(df: &DataFrame, binary_columns: &[String]) -> Result<ColumnRoles> {
    for name in binary_columns {
        if df.column(name).is_err() {
            return Err(TransformError::ColumnNotFound {
                column: name.clone(),
            });
        }
    }

    let numeric: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(|column| column.name().to_string())
        .filter(|name| !binary_columns.contains(name))
        .collect();

    Ok(ColumnRoles {
        numeric,
        binary: binary_columns.to_vec(),
    })
}
