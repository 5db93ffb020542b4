//! Column-wise feature transformation.
//!
//! [`ColumnTransformer`] holds the column roles. Fitting it produces a
//! [`FittedColumnTransformer`], which is the only type that can transform,
//! so an unfitted transform cannot be expressed.

use std::time::Instant;

use polars::prelude::{DataFrame, Series};
use tracing::{debug, info, info_span};
use wine_model::ColumnRoles;

use crate::encoder::OneHotEncoder;
use crate::error::{Result, TransformError};
use crate::scaler::StandardScaler;

/// Unfitted transformer: numeric columns are standardized and binary columns
/// are one-hot encoded.
#[derive(Debug, Clone)]
pub struct ColumnTransformer {
    roles: ColumnRoles,
}

impl ColumnTransformer {
    pub fn new(roles: ColumnRoles) -> Self {
        Self { roles }
    }

    /// Fit both column groups on `x`.
    ///
    /// `y` is only checked for length; no transform is supervised.
    ///
    /// # Errors
    ///
    /// - [`TransformError::ConflictingRoles`] if a column has both roles
    /// - [`TransformError::NoFeatureColumns`] if no column has a role
    /// - [`TransformError::TargetLengthMismatch`] if `y` and `x` differ in height
    /// - the fit errors of [`StandardScaler`] and [`OneHotEncoder`]
    pub fn fit(&self, x: &DataFrame, y: Option<&Series>) -> Result<FittedColumnTransformer> {
        if let Some(column) = self.roles.overlapping_column() {
            return Err(TransformError::ConflictingRoles {
                column: column.to_string(),
            });
        }
        if self.roles.is_empty() {
            return Err(TransformError::NoFeatureColumns);
        }
        if let Some(y) = y
            && y.len() != x.height()
        {
            return Err(TransformError::TargetLengthMismatch {
                features: x.height(),
                target: y.len(),
            });
        }

        let scaler = StandardScaler::fit(x, &self.roles.numeric)?;
        let encoder = OneHotEncoder::fit(x, &self.roles.binary)?;
        debug!(
            numeric = self.roles.numeric.len(),
            binary = self.roles.binary.len(),
            rows = x.height(),
            "column transformer fitted"
        );
        Ok(FittedColumnTransformer { scaler, encoder })
    }

    /// Fit on `x` and transform the same rows.
    pub fn fit_transform(&self, x: &DataFrame, y: Option<&Series>) -> Result<DataFrame> {
        self.fit(x, y)?.transform(x)
    }
}

/// Transformer with learned statistics and categories.
#[derive(Debug, Clone)]
pub struct FittedColumnTransformer {
    scaler: StandardScaler,
    encoder: OneHotEncoder,
}

impl FittedColumnTransformer {
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// Names of the emitted columns, scaled numeric first.
    pub fn output_columns(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .scaler
            .columns()
            .iter()
            .map(|scale| scale.column.clone())
            .collect();
        names.extend(self.encoder.output_columns());
        names
    }

    /// Emit `[scaled numeric..., encoded binary...]` with the row order of `x`.
    /// Columns without a role are dropped.
    pub fn transform(&self, x: &DataFrame) -> Result<DataFrame> {
        let mut columns = self.scaler.transform(x)?;
        columns.extend(self.encoder.transform(x)?);
        Ok(DataFrame::new(columns)?)
    }
}

/// Fit the transformer on the training features and return the transformed
/// training features.
///
/// # Errors
///
/// Propagates the errors of [`ColumnTransformer::fit`] and
/// [`FittedColumnTransformer::transform`].
pub fn transform_with_pipeline(
    x_train: &DataFrame,
    y_train: &Series,
    roles: &ColumnRoles,
) -> Result<DataFrame> {
    let span = info_span!("transform", rows = x_train.height());
    let _guard = span.enter();
    let start = Instant::now();

    let transformer = ColumnTransformer::new(roles.clone());
    let fitted = transformer.fit(x_train, Some(y_train))?;
    let constant: Vec<&str> = fitted
        .scaler()
        .columns()
        .iter()
        .filter(|scale| scale.is_constant())
        .map(|scale| scale.column.as_str())
        .collect();
    debug!(
        output_columns = ?fitted.output_columns(),
        constant_columns = ?constant,
        "transform plan"
    );
    let output = fitted.transform(x_train)?;

    info!(
        rows = output.height(),
        columns = output.width(),
        numeric = roles.numeric.len(),
        binary = roles.binary.len(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, NamedFrom};

    fn features() -> DataFrame {
        DataFrame::new(vec![
            Column::new("alcohol".into(), vec![9.4, 9.8, 10.0, 11.0]),
            Column::new(
                "wine_type".into(),
                vec!["red_wine", "white_wine", "red_wine", "white_wine"],
            ),
            Column::new("sulphates".into(), vec![0.56, 0.68, 0.65, 0.58]),
        ])
        .unwrap()
    }

    fn roles() -> ColumnRoles {
        ColumnRoles::new(["alcohol", "sulphates"], ["wine_type"])
    }

    #[test]
    fn output_orders_numeric_before_binary() {
        let transformer = ColumnTransformer::new(roles());
        let fitted = transformer.fit(&features(), None).unwrap();
        assert_eq!(
            fitted.output_columns(),
            vec!["alcohol", "sulphates", "wine_type"]
        );

        let output = fitted.transform(&features()).unwrap();
        let names: Vec<String> = output
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, fitted.output_columns());
        assert_eq!(output.height(), 4);
    }

    #[test]
    fn conflicting_roles_are_rejected() {
        let roles = ColumnRoles::new(["alcohol", "wine_type"], ["wine_type"]);
        let err = ColumnTransformer::new(roles)
            .fit(&features(), None)
            .unwrap_err();
        assert!(matches!(err, TransformError::ConflictingRoles { column } if column == "wine_type"));
    }

    #[test]
    fn empty_roles_are_rejected() {
        let roles = ColumnRoles::new(Vec::<String>::new(), Vec::<String>::new());
        let err = ColumnTransformer::new(roles)
            .fit(&features(), None)
            .unwrap_err();
        assert!(matches!(err, TransformError::NoFeatureColumns));
    }

    #[test]
    fn target_length_must_match() {
        let y = Series::new("quality".into(), vec![5i64, 6]);
        let err = ColumnTransformer::new(roles())
            .fit(&features(), Some(&y))
            .unwrap_err();
        assert!(matches!(
            err,
            TransformError::TargetLengthMismatch {
                features: 4,
                target: 2
            }
        ));
    }

    #[test]
    fn unroled_columns_are_dropped() {
        let roles = ColumnRoles::new(["alcohol"], ["wine_type"]);
        let output = ColumnTransformer::new(roles)
            .fit_transform(&features(), None)
            .unwrap();
        assert_eq!(output.width(), 2);
        assert!(output.column("sulphates").is_err());
    }
}
