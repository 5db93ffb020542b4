//! Verbatim export of a raw source table.
//!
//! The combiner writes the red-wine table to the output location before the
//! provenance column is added. The export is comma-delimited and carries a
//! leading unnamed row-index column (`0..n`). The final pipeline output
//! later overwrites the same path.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;
use wine_common::any_to_string;

use crate::error::{IngestError, Result};

/// Write `df` to `path` with a leading row-index column.
///
/// Any existing file at `path` is truncated.
pub fn write_raw_snapshot(df: &DataFrame, path: &Path) -> Result<()> {
    let csv_error = |source: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;

    let mut header = Vec::with_capacity(df.width() + 1);
    header.push(String::new());
    header.extend(df.get_column_names().iter().map(|name| name.to_string()));
    writer.write_record(&header).map_err(csv_error)?;

    let columns = df.get_columns();
    let mut record: Vec<String> = Vec::with_capacity(columns.len() + 1);
    for row in 0..df.height() {
        record.clear();
        record.push(row.to_string());
        for column in columns {
            record.push(any_to_string(column.get(row)?));
        }
        writer.write_record(&record).map_err(csv_error)?;
    }

    writer.flush().map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        rows = df.height(),
        "wrote raw snapshot"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    #[test]
    fn snapshot_has_unnamed_index_column() {
        let df = DataFrame::new(vec![
            Series::new("fixed acidity".into(), vec![7.4, 11.0]).into_column(),
            Series::new("quality".into(), vec![5i64, 6]).into_column(),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.csv");

        write_raw_snapshot(&df, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, ",fixed acidity,quality\n0,7.4,5\n1,11.0,6\n");
    }

    #[test]
    fn snapshot_truncates_existing_file() {
        let df = DataFrame::new(vec![Column::new("pH".into(), vec![3.51])]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale contents that are much longer than the snapshot\n").unwrap();

        write_raw_snapshot(&df, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), ",pH\n0,3.51\n");
    }

    #[test]
    fn snapshot_into_missing_directory_fails() {
        let df = DataFrame::new(vec![Column::new("pH".into(), vec![3.51])]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = write_raw_snapshot(&df, &path).unwrap_err();
        assert!(matches!(err, IngestError::CsvWrite { .. }));
    }
}
