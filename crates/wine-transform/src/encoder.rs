//! One-hot encoding with drop-if-binary.
//!
//! Categories are the sorted distinct string values seen while fitting. A
//! column with exactly two categories collapses to one indicator named after
//! the column, set for the second category. A single category also yields one
//! indicator named after the column, set for every known value. Three or more
//! categories expand into one indicator per category named
//! `<column>_<category>`.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{Result, TransformError};

/// Fitted categories for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedColumn {
    pub column: String,
    /// Sorted, distinct.
    pub categories: Vec<String>,
}

impl EncodedColumn {
    pub fn is_binary(&self) -> bool {
        self.categories.len() == 2
    }

    /// True when the column encodes to a single indicator.
    pub fn is_single_indicator(&self) -> bool {
        self.categories.len() <= 2
    }

    pub fn output_names(&self) -> Vec<String> {
        if self.is_single_indicator() {
            return vec![self.column.clone()];
        }
        self.categories
            .iter()
            .map(|category| format!("{}_{}", self.column, category))
            .collect()
    }

    fn position(&self, value: Option<&str>) -> Result<usize> {
        let unknown = || TransformError::UnknownCategory {
            column: self.column.clone(),
            value: value.unwrap_or("null").to_string(),
        };
        let value = value.ok_or_else(unknown)?;
        self.categories
            .binary_search_by(|category| category.as_str().cmp(value))
            .map_err(|_| unknown())
    }
}

fn string_values(df: &DataFrame, name: &str) -> Result<Column> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    Ok(column.cast(&DataType::String)?)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OneHotEncoder {
    columns: Vec<EncodedColumn>,
}

impl OneHotEncoder {
    /// Learn the category set of each of `columns`.
    ///
    /// # Errors
    ///
    /// - [`TransformError::ColumnNotFound`] for an absent column
    /// - [`TransformError::EmptyCategories`] for a column with no non-null values
    pub fn fit(df: &DataFrame, columns: &[String]) -> Result<Self> {
        let mut fitted = Vec::with_capacity(columns.len());
        for name in columns {
            let column = string_values(df, name)?;
            let categories: BTreeSet<String> = column
                .str()?
                .into_iter()
                .flatten()
                .map(str::to_string)
                .collect();
            if categories.is_empty() {
                return Err(TransformError::EmptyCategories {
                    column: name.clone(),
                });
            }
            let encoded = EncodedColumn {
                column: name.clone(),
                categories: categories.into_iter().collect(),
            };
            debug!(
                column = %name,
                categories = ?encoded.categories,
                binary = encoded.is_binary(),
                "fitted one-hot encoder column"
            );
            fitted.push(encoded);
        }
        Ok(Self { columns: fitted })
    }

    pub fn columns(&self) -> &[EncodedColumn] {
        &self.columns
    }

    pub fn output_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .flat_map(EncodedColumn::output_names)
            .collect()
    }

    /// Encode the fitted columns of `df` as Int32 indicators.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::UnknownCategory`] for a value (or null) not
    /// seen while fitting.
    pub fn transform(&self, df: &DataFrame) -> Result<Vec<Column>> {
        let mut output = Vec::new();
        for encoded in &self.columns {
            let column = string_values(df, &encoded.column)?;
            let positions = column
                .str()?
                .into_iter()
                .map(|value| encoded.position(value))
                .collect::<Result<Vec<usize>>>()?;

            if encoded.is_single_indicator() {
                // Set for the last category: the second of two, or the only one.
                let last = encoded.categories.len() - 1;
                let values: Vec<i32> = positions
                    .iter()
                    .map(|&pos| i32::from(pos == last))
                    .collect();
                output.push(Series::new(encoded.column.as_str().into(), values).into_column());
                continue;
            }
            for (idx, name) in encoded.output_names().into_iter().enumerate() {
                let values: Vec<i32> = positions.iter().map(|&pos| i32::from(pos == idx)).collect();
                output.push(Series::new(name.into(), values).into_column());
            }
        }
        Ok(output)
    }
}
