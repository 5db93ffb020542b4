//! Stage orchestration for a preprocessing run.
//!
//! combine -> split -> transform -> output. Each stage runs once; any error
//! aborts the run with the stage named in the error context.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{debug, info, info_span};

use wine_ingest::combine_sources;
use wine_model::{PipelineSummary, PrepConfig, SourceSummary, WineType};
use wine_transform::{infer_column_roles, split_for_train_test, transform_with_pipeline};

/// Run the full pipeline described by `config`.
///
/// On success `config.out_file` holds the transformed training features.
/// If a later stage fails after the combiner ran, the raw red snapshot is
/// left at that path.
pub fn run_preprocessing(config: &PrepConfig) -> Result<PipelineSummary> {
    let span = info_span!("preprocess", out_file = %config.out_file.display());
    let _guard = span.enter();
    let start = Instant::now();
    if let Ok(json) = serde_json::to_string(config) {
        debug!(config = %json, "effective configuration");
    }

    // =========================================================================
    // Stage 1: Combine
    // =========================================================================
    let combined = combine_sources(
        &config.input_red,
        &config.input_white,
        &config.out_file,
        config.schema_policy,
    )
    .context("combine red and white sources")?;

    // =========================================================================
    // Stage 2: Split
    // =========================================================================
    let split = split_for_train_test(&combined.frame, &config.target_column, &config.split)
        .context("split combined table")?;

    // =========================================================================
    // Stage 3: Transform
    // =========================================================================
    let roles = infer_column_roles(&split.x_train, &config.binary_columns)
        .context("resolve feature column roles")?;
    let mut transformed = transform_with_pipeline(&split.x_train, &split.y_train, &roles)
        .context("transform training features")?;

    // =========================================================================
    // Stage 4: Output
    // =========================================================================
    write_output_csv(&mut transformed, &config.out_file)?;

    let output_columns: Vec<String> = transformed
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    info!(
        rows = transformed.height(),
        columns = output_columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "preprocessing complete"
    );

    Ok(PipelineSummary {
        sources: vec![
            SourceSummary {
                wine_type: WineType::Red,
                path: config.input_red.clone(),
                rows: combined.red_rows,
            },
            SourceSummary {
                wine_type: WineType::White,
                path: config.input_white.clone(),
                rows: combined.white_rows,
            },
        ],
        combined_rows: combined.total_rows(),
        train_rows: split.x_train.height(),
        test_rows: split.x_test.height(),
        output_path: config.out_file.clone(),
        output_columns,
    })
}

/// Write `df` as comma-delimited text with a header row and no index column.
///
/// Any existing file at `path` is truncated.
pub fn write_output_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create output {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .with_context(|| format!("write output {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote transformed table"
    );
    Ok(())
}
