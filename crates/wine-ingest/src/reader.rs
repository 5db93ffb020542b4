//! Raw source reading.
//!
//! The raw wine-quality exports are semicolon-delimited with a quoted header
//! row. Column types are inferred over the whole file so that both sources
//! agree on a dtype whenever their values do.

use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Field separator of the raw sources.
pub const RAW_SEPARATOR: u8 = b';';

/// Check that the source exists and is a readable file.
fn check_source(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read a semicolon-delimited wine source into a DataFrame.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] if the path does not name a file
/// - [`IngestError::CsvParse`] if Polars cannot parse the content
/// - [`IngestError::EmptyCsv`] if the file has no columns
pub fn read_wine_csv(path: &Path) -> Result<DataFrame> {
    check_source(path)?;

    let parse_error = |err: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(CsvParseOptions::default().with_separator(RAW_SEPARATOR))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read raw source"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn reads_quoted_semicolon_header() {
        let file = source(
            "\"fixed acidity\";\"pH\";\"quality\"\n7.4;3.51;5\n7.8;3.2;5\n11.2;3.16;6\n",
        );
        let df = read_wine_csv(file.path()).expect("read source");
        assert_eq!(df.height(), 3);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["fixed acidity", "pH", "quality"]);
        let acidity = df.column("fixed acidity").unwrap().f64().unwrap();
        assert_eq!(acidity.get(2), Some(11.2));
        assert!(df.column("quality").unwrap().dtype().is_integer());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = read_wine_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn directory_is_not_a_source() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = read_wine_csv(dir.path()).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn ragged_rows_fail_to_parse() {
        let file = source("a;b\n1;2\n3;4;5;6\n");
        let err = read_wine_csv(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }
}
