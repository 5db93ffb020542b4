//! Type-safe enumerations for the preprocessing pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance of a record: which raw source it was read from.
///
/// Every row of the unified table carries one of these labels in the
/// `wine_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WineType {
    /// Record from the red-wine source.
    #[serde(rename = "red_wine")]
    Red,
    /// Record from the white-wine source.
    #[serde(rename = "white_wine")]
    White,
}

impl WineType {
    /// Returns the label written into the provenance column.
    pub fn label(&self) -> &'static str {
        match self {
            WineType::Red => "red_wine",
            WineType::White => "white_wine",
        }
    }
}

impl fmt::Display for WineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the combiner treats inputs whose column sets disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaPolicy {
    /// Reject mismatched column sets with a schema error.
    #[default]
    Strict,
    /// Take the column union and pad missing cells with nulls.
    Union,
}

impl SchemaPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaPolicy::Strict => "strict",
            SchemaPolicy::Union => "union",
        }
    }
}

impl fmt::Display for SchemaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
