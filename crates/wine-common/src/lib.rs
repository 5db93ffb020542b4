//! Shared utilities for the wine preprocessing crates.
//!
//! This crate provides Polars `AnyValue` helpers and the number formatting
//! used when tables are written back to text.

pub mod polars;

pub use polars::{any_to_string, format_float, is_numeric_dtype};
