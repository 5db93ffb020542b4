//! Well-known column names and column roles.

use serde::{Deserialize, Serialize};

/// Target column held out by the splitter.
pub const TARGET_COLUMN: &str = "quality";

/// Provenance column added by the combiner.
pub const PROVENANCE_COLUMN: &str = "wine_type";

/// Explicit roles of the feature columns fed to the transformer.
///
/// `numeric` columns are standardized, `binary` columns are one-hot encoded.
/// The transformer emits numeric outputs first, then encoded outputs, each
/// group in the order listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    pub numeric: Vec<String>,
    pub binary: Vec<String>,
}

impl ColumnRoles {
    pub fn new<N, B>(numeric: N, binary: B) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            numeric: numeric.into_iter().map(Into::into).collect(),
            binary: binary.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the first column listed under both roles, if any.
    pub fn overlapping_column(&self) -> Option<&str> {
        self.numeric
            .iter()
            .find(|name| self.binary.contains(name))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.binary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_column_detects_double_assignment() {
        let roles = ColumnRoles::new(["alcohol", "wine_type"], ["wine_type"]);
        assert_eq!(roles.overlapping_column(), Some("wine_type"));
        let clean = ColumnRoles::new(["alcohol"], ["wine_type"]);
        assert_eq!(clean.overlapping_column(), None);
    }
}
