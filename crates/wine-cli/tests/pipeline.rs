//! End-to-end tests for a preprocessing run.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::{Column, DataFrame, NamedFrom};

use wine_cli::pipeline::{run_preprocessing, write_output_csv};
use wine_model::{PrepConfig, SchemaPolicy};

const HEADER: &str = "\"fixed acidity\";\"volatile acidity\";\"citric acid\";\"residual sugar\";\
                      \"chlorides\";\"free sulfur dioxide\";\"total sulfur dioxide\";\"density\";\
                      \"pH\";\"sulphates\";\"alcohol\";\"quality\"";

const RED_ROWS: &[&str] = &[
    "7.4;0.7;0;1.9;0.076;11;34;0.9978;3.51;0.56;9.4;5",
    "7.8;0.88;0;2.6;0.098;25;67;0.9968;3.2;0.68;9.8;5",
    "7.8;0.76;0.04;2.3;0.092;15;54;0.997;3.26;0.65;9.8;5",
    "11.2;0.28;0.56;1.9;0.075;17;60;0.998;3.16;0.58;9.8;6",
    "7.4;0.66;0;1.8;0.075;13;40;0.9978;3.51;0.56;9.4;5",
    "7.9;0.6;0.06;1.6;0.069;15;59;0.9964;3.3;0.46;9.4;5",
    "7.3;0.65;0;1.2;0.065;15;21;0.9946;3.39;0.47;10;7",
];

const WHITE_ROWS: &[&str] = &[
    "7;0.27;0.36;20.7;0.045;45;170;1.001;3;0.45;8.8;6",
    "6.3;0.3;0.34;1.6;0.049;14;132;0.994;3.3;0.49;9.5;6",
    "8.1;0.28;0.4;6.9;0.05;30;97;0.9951;3.26;0.44;10.1;6",
    "7.2;0.23;0.32;8.5;0.058;47;186;0.9956;3.19;0.4;9.9;6",
    "6.2;0.32;0.16;7;0.045;30;136;0.9949;3.18;0.47;9.6;6",
    "8.1;0.22;0.43;1.5;0.044;28;129;0.9938;3.22;0.45;11;6",
    "6.5;0.31;0.14;7.5;0.044;34;133;0.9955;3.22;0.5;9.5;5",
    "6.8;0.26;0.42;1.7;0.049;41;122;0.993;3.47;0.48;10.5;8",
];

fn write_source(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).expect("write source");
    path
}

fn config(dir: &Path) -> PrepConfig {
    let red = write_source(dir, "winequality-red.csv", RED_ROWS);
    let white = write_source(dir, "winequality-white.csv", WHITE_ROWS);
    PrepConfig::new(red, white, dir.join("prepped.csv"))
}

#[test]
fn run_writes_transformed_training_features() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    let summary = run_preprocessing(&config).unwrap();

    // 15 rows, test = round(0.2 * 15) = 3.
    assert_eq!(summary.input_rows(), 15);
    assert_eq!(summary.combined_rows, 15);
    assert_eq!(summary.test_rows, 3);
    assert_eq!(summary.train_rows, 12);
    assert_eq!(summary.output_columns.len(), 12);
    assert_eq!(
        summary.output_columns.last().map(String::as_str),
        Some("wine_type")
    );
    assert!(!summary.output_columns.iter().any(|name| name == "quality"));

    let output = fs::read_to_string(&config.out_file).unwrap();
    let mut lines = output.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("fixed acidity,volatile acidity,"));
    assert!(header.ends_with(",alcohol,wine_type"));
    assert!(!header.contains("quality"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 12);
    for row in rows {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 12);
        let encoded = fields[11];
        assert!(encoded == "0" || encoded == "1", "unexpected flag {encoded}");
        for field in &fields[..11] {
            let value: f64 = field.parse().unwrap();
            assert!(value.is_finite());
        }
    }
}

#[test]
fn identical_configs_produce_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());

    run_preprocessing(&config).unwrap();
    let first = fs::read_to_string(&config.out_file).unwrap();
    run_preprocessing(&config).unwrap();
    let second = fs::read_to_string(&config.out_file).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_red_source_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let white = write_source(dir.path(), "winequality-white.csv", WHITE_ROWS);
    let config = PrepConfig::new(
        dir.path().join("absent.csv"),
        white,
        dir.path().join("out.csv"),
    );

    let err = run_preprocessing(&config).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("combine red and white sources"));
    assert!(message.contains("absent.csv"));
    assert!(!config.out_file.exists());
}

#[test]
fn mismatched_schemas_leave_the_raw_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let red = write_source(dir.path(), "winequality-red.csv", RED_ROWS);
    let white = dir.path().join("winequality-white.csv");
    fs::write(&white, "\"fixed acidity\";\"colour\";\"quality\"\n7;1;6\n").unwrap();
    let config = PrepConfig::new(red, white, dir.path().join("out.csv"))
        .with_schema_policy(SchemaPolicy::Strict);

    let err = run_preprocessing(&config).unwrap_err();

    assert!(format!("{err:#}").contains("source schemas differ"));
    let snapshot = fs::read_to_string(&config.out_file).unwrap();
    assert!(snapshot.starts_with(",fixed acidity,volatile acidity,"));
    assert_eq!(snapshot.lines().count(), RED_ROWS.len() + 1);
}

#[test]
fn output_csv_has_header_and_no_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.csv");
    let mut df = DataFrame::new(vec![
        Column::new("alcohol".into(), vec![-1.0, 1.0]),
        Column::new("wine_type".into(), vec![0i32, 1]),
    ])
    .unwrap();

    write_output_csv(&mut df, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "alcohol,wine_type");
    let (alcohol, flag) = lines[1].split_once(',').unwrap();
    assert_eq!(alcohol.parse::<f64>().unwrap(), -1.0);
    assert_eq!(flag, "0");
}
