// File: crates/scenario-plot/tests/loader.rs
// Purpose: CSV loading: header handling, numeric parsing and the error taxonomy.

use std::io::Write;
use std::path::{Path, PathBuf};

use scenario_plot::table::load;
use scenario_plot::{LoadOptions, PlotError};

fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(body.as_bytes()).unwrap();
    path
}

fn load_str(body: &str) -> Result<scenario_plot::DataTable, PlotError> {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.csv", body);
    load(&path, &LoadOptions::default())
}

#[test]
fn loads_every_column_in_header_order() {
    let t = load_str("time,A,B,C\n0,1,2,3\n0.5, 4 ,5,6\n").unwrap();
    assert_eq!(t.column_names().collect::<Vec<_>>(), ["time", "A", "B", "C"]);
    assert_eq!(t.time(), &[0.0, 0.5]);
    assert_eq!(t.column("A"), Some(&[1.0, 4.0][..]));
    assert_eq!(t.row_count(), 2);
}

#[test]
fn extra_columns_are_kept() {
    let t = load_str("time,A,MA,MR\n0,1,2,3\n").unwrap();
    assert!(t.has_column("MA") && t.has_column("MR"));
}

#[test]
fn header_only_file_is_an_empty_table() {
    let t = load_str("time,A\n").unwrap();
    assert_eq!(t.row_count(), 0);
}

#[test]
fn custom_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(dir.path(), "data.ssv", "time;r0\n1;2\n");
    let t = load(&path, &LoadOptions { delimiter: b';' }).unwrap();
    assert_eq!(t.column("r0"), Some(&[2.0][..]));
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmake-build-debug/intro_output.csv");
    match load(&path, &LoadOptions::default()) {
        Err(PlotError::FileNotFound { path: p }) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn non_numeric_cell_is_parse_error_with_line() {
    match load_str("time,A\n0,1\n1,abc\n") {
        Err(PlotError::Parse { line, message, .. }) => {
            assert_eq!(line, Some(3));
            assert!(message.contains("'A'") && message.contains("abc"), "{message}");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn ragged_row_is_parse_error() {
    match load_str("time,A,B\n0,1,2\n1,2\n") {
        Err(PlotError::Parse { line, message, .. }) => {
            assert_eq!(line, Some(3));
            assert_eq!(message, "row has 2 fields, header has 3");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn empty_file_and_blank_header_are_parse_errors() {
    assert!(matches!(load_str(""), Err(PlotError::Parse { line: None, .. })));
    assert!(matches!(load_str("time,,A\n0,1,2\n"), Err(PlotError::Parse { line: Some(1), .. })));
    assert!(matches!(load_str("time,A,A\n0,1,2\n"), Err(PlotError::Parse { .. })));
}

#[test]
fn missing_time_is_schema_error() {
    match load_str("t,A\n0,1\n") {
        Err(e @ PlotError::Schema { .. }) => assert!(e.to_string().contains("no 'time' column")),
        other => panic!("expected Schema, got {other:?}"),
    }
}
