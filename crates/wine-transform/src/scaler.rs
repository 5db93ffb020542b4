//! Per-column standardization.
//!
//! Each column is centred on its training mean and divided by its training
//! population standard deviation (ddof = 0). Nulls are ignored when fitting
//! and pass through unchanged when transforming.
//!
//! A column whose variance is indistinguishable from zero keeps a scale of
//! 1.0, so its outputs are `x - mean` (zero up to rounding) instead of
//! NaN or infinity.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;
use wine_common::is_numeric_dtype;

use crate::error::{Result, TransformError};

/// Fitted statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnScale {
    pub column: String,
    /// Non-null training values seen.
    pub n_samples: usize,
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Divisor applied after centring.
    pub scale: f64,
}

impl ColumnScale {
    fn from_values(column: &str, values: &[f64]) -> Self {
        let n_samples = values.len();
        if n_samples == 0 {
            return Self {
                column: column.to_string(),
                n_samples,
                mean: 0.0,
                variance: 0.0,
                scale: 1.0,
            };
        }
        let n = n_samples as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let scale = if is_constant(n, mean, variance) {
            1.0
        } else {
            variance.sqrt()
        };
        Self {
            column: column.to_string(),
            n_samples,
            mean,
            variance,
            scale,
        }
    }

    /// True when the fitted variance is only accumulated rounding error.
    pub fn is_constant(&self) -> bool {
        is_constant(self.n_samples as f64, self.mean, self.variance)
    }

    pub fn apply(&self, value: f64) -> f64 {
        (value - self.mean) / self.scale
    }
}

fn is_constant(n: f64, mean: f64, variance: f64) -> bool {
    let eps = f64::EPSILON;
    let upper_bound = n * eps * variance + (n * mean * eps).powi(2);
    variance <= upper_bound
}

fn float_values(df: &DataFrame, name: &str) -> Result<Column> {
    let column = df
        .column(name)
        .map_err(|_| TransformError::ColumnNotFound {
            column: name.to_string(),
        })?;
    if !is_numeric_dtype(column.dtype()) {
        return Err(TransformError::NonNumericColumn {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    Ok(column.cast(&DataType::Float64)?)
}

/// Standardizes numeric columns with statistics learned from training data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    columns: Vec<ColumnScale>,
}

impl StandardScaler {
    /// Learn mean and scale for each of `columns` from `df`.
    ///
    /// # Errors
    ///
    /// - [`TransformError::ColumnNotFound`] for an absent column
    /// - [`TransformError::NonNumericColumn`] for a non-numeric column
    pub fn fit(df: &DataFrame, columns: &[String]) -> Result<Self> {
        let mut fitted = Vec::with_capacity(columns.len());
        for name in columns {
            let column = float_values(df, name)?;
            let values: Vec<f64> = column.f64()?.into_iter().flatten().collect();
            let scale = ColumnScale::from_values(name, &values);
            debug!(
                column = %name,
                n_samples = scale.n_samples,
                mean = scale.mean,
                scale = scale.scale,
                constant = scale.is_constant(),
                "fitted standard scaler column"
            );
            fitted.push(scale);
        }
        Ok(Self { columns: fitted })
    }

    pub fn columns(&self) -> &[ColumnScale] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnScale> {
        self.columns.iter().find(|scale| scale.column == name)
    }

    /// Standardize the fitted columns of `df`, one Float64 column each, in
    /// fit order.
    pub fn transform(&self, df: &DataFrame) -> Result<Vec<Column>> {
        let mut output = Vec::with_capacity(self.columns.len());
        for scale in &self.columns {
            let column = float_values(df, &scale.column)?;
            let values: Vec<Option<f64>> = column
                .f64()?
                .into_iter()
                .map(|value| value.map(|v| scale.apply(v)))
                .collect();
            output.push(Series::new(scale.column.as_str().into(), values).into_column());
        }
        Ok(output)
    }
}
