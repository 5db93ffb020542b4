//! Provenance labelling and source combination.
//!
//! The unified table is the red block followed by the white block. Each row
//! keeps its position within its source, and a `wine_type` column records
//! which source it came from. Row positions in the result form a fresh
//! contiguous index.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, Series};
use tracing::{debug, info, info_span, warn};
use wine_common::is_numeric_dtype;
use wine_model::{PROVENANCE_COLUMN, SchemaPolicy, WineType};

use crate::error::{IngestError, Result};
use crate::reader::read_wine_csv;
use crate::snapshot::write_raw_snapshot;

/// Output of the combiner stage.
#[derive(Debug, Clone)]
pub struct CombinedSources {
    /// Unified table: red rows, then white rows, plus the provenance column.
    pub frame: DataFrame,
    pub red_rows: usize,
    pub white_rows: usize,
}

impl CombinedSources {
    pub fn total_rows(&self) -> usize {
        self.frame.height()
    }
}

/// Append the provenance column, filled with `wine_type`'s label.
///
/// An existing column of the same name is replaced.
pub fn label_provenance(mut df: DataFrame, wine_type: WineType) -> Result<DataFrame> {
    let height = df.height();
    let column = Column::new(PROVENANCE_COLUMN.into(), vec![wine_type.label(); height]);
    df.with_column(column)?;
    Ok(df)
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Names in `left` that do not appear in `right`, in `left` order.
fn names_missing_from(left: &[String], right: &[String]) -> Vec<String> {
    let right: BTreeSet<&str> = right.iter().map(String::as_str).collect();
    left.iter()
        .filter(|name| !right.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Add null-filled columns for every name in `names` that `df` lacks.
fn pad_missing_columns(df: &mut DataFrame, names: &[String], other: &DataFrame) -> Result<()> {
    let height = df.height();
    for name in names {
        if df.column(name).is_ok() {
            continue;
        }
        let dtype = other.column(name)?.dtype().clone();
        df.with_column(Series::full_null(name.as_str().into(), height, &dtype).into_column())?;
    }
    Ok(())
}

/// Cast columns whose dtypes differ so that both frames can be stacked.
///
/// An empty frame adopts the other frame's dtypes. Numeric disagreements
/// (e.g. integer vs float) widen to Float64; anything else falls back to String.
fn align_dtypes(top: &mut DataFrame, bottom: &mut DataFrame, names: &[String]) -> Result<()> {
    for name in names {
        let top_dtype = top.column(name)?.dtype().clone();
        let bottom_dtype = bottom.column(name)?.dtype().clone();
        if top_dtype == bottom_dtype {
            continue;
        }
        let target = if bottom.height() == 0 {
            top_dtype.clone()
        } else if top.height() == 0 {
            bottom_dtype.clone()
        } else if is_numeric_dtype(&top_dtype) && is_numeric_dtype(&bottom_dtype) {
            DataType::Float64
        } else if top_dtype == DataType::Null {
            bottom_dtype.clone()
        } else if bottom_dtype == DataType::Null {
            top_dtype.clone()
        } else {
            DataType::String
        };
        debug!(
            column = %name,
            top = %top_dtype,
            bottom = %bottom_dtype,
            target = %target,
            "aligning column dtype"
        );
        let cast = top.column(name)?.cast(&target)?;
        top.with_column(cast)?;
        let cast = bottom.column(name)?.cast(&target)?;
        bottom.with_column(cast)?;
    }
    Ok(())
}

/// Concatenate the red and white frames, red block first.
///
/// Both frames are labelled with their provenance before stacking.
///
/// # Errors
///
/// Under [`SchemaPolicy::Strict`], returns [`IngestError::SchemaMismatch`] if
/// the two frames do not carry the same column-name set. Under
/// [`SchemaPolicy::Union`] the result holds the union of columns (red order
/// first, then white-only columns) with missing cells set to null.
pub fn combine_frames(
    red: DataFrame,
    white: DataFrame,
    policy: SchemaPolicy,
) -> Result<DataFrame> {
    let red_names = column_names(&red);
    let white_names = column_names(&white);
    let missing_in_red = names_missing_from(&white_names, &red_names);
    let missing_in_white = names_missing_from(&red_names, &white_names);

    let mut red = red;
    let mut white = white;
    let mut names = red_names;

    if !missing_in_red.is_empty() || !missing_in_white.is_empty() {
        match policy {
            SchemaPolicy::Strict => {
                return Err(IngestError::SchemaMismatch {
                    missing_in_red,
                    missing_in_white,
                });
            }
            SchemaPolicy::Union => {
                warn!(
                    missing_in_red = ?missing_in_red,
                    missing_in_white = ?missing_in_white,
                    "source schemas differ; padding missing columns with nulls"
                );
                names.extend(missing_in_red.iter().cloned());
                pad_missing_columns(&mut red, &missing_in_red, &white)?;
                pad_missing_columns(&mut white, &missing_in_white, &red)?;
            }
        }
    }

    let mut red = red.select(names.iter().map(String::as_str))?;
    let mut white = white.select(names.iter().map(String::as_str))?;
    align_dtypes(&mut red, &mut white, &names)?;

    let mut red = label_provenance(red, WineType::Red)?;
    let white = label_provenance(white, WineType::White)?;
    red.vstack_mut(&white)?;
    Ok(red)
}

/// Run the combiner stage end to end.
///
/// Reads the red source, writes it verbatim to `raw_snapshot` (see
/// [`write_raw_snapshot`]), reads the white source, and combines both.
pub fn combine_sources(
    red_path: &Path,
    white_path: &Path,
    raw_snapshot: &Path,
    policy: SchemaPolicy,
) -> Result<CombinedSources> {
    let span = info_span!("combine", policy = %policy);
    let _guard = span.enter();
    let start = Instant::now();

    let red = read_wine_csv(red_path)?;
    write_raw_snapshot(&red, raw_snapshot)?;
    let white = read_wine_csv(white_path)?;

    let red_rows = red.height();
    let white_rows = white.height();
    let frame = combine_frames(red, white, policy)?;

    info!(
        red_rows,
        white_rows,
        combined_rows = frame.height(),
        columns = frame.width(),
        duration_ms = start.elapsed().as_millis(),
        "combine complete"
    );
    Ok(CombinedSources {
        frame,
        red_rows,
        white_rows,
    })
}
