// File: crates/scenario-plot/src/table.rs
// Summary: Column-addressable numeric table and the CSV loader that fills it.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::error::{PlotError, Result};
use crate::registry::TIME_COLUMN;

/// Why a set of columns cannot form a table.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("column name '{0}' appears more than once")]
    DuplicateColumn(String),
    #[error("column '{column}' has {len} values, '{first}' has {expected}")]
    Ragged { column: String, len: usize, first: String, expected: usize },
    #[error("no 'time' column")]
    MissingTime,
}

/// Equal-length numeric columns in header order; always has a `time` column.
#[derive(Clone, Debug, PartialEq)]
pub struct DataTable {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl DataTable {
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self, ShapeError> {
        let mut names: Vec<String> = Vec::with_capacity(columns.len());
        let mut values: Vec<Vec<f64>> = Vec::with_capacity(columns.len());
        for (name, col) in columns {
            let name = name.into();
            if names.contains(&name) {
                return Err(ShapeError::DuplicateColumn(name));
            }
            if let (Some(first), Some(first_col)) = (names.first(), values.first()) {
                if col.len() != first_col.len() {
                    return Err(ShapeError::Ragged {
                        column: name,
                        len: col.len(),
                        first: first.clone(),
                        expected: first_col.len(),
                    });
                }
            }
            names.push(name);
            values.push(col);
        }
        if !names.iter().any(|n| n == TIME_COLUMN) {
            return Err(ShapeError::MissingTime);
        }
        Ok(Self { names, columns: values })
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.names.iter().position(|n| n == name).map(|i| self.columns[i].as_slice())
    }

    /// The shared x column.
    pub fn time(&self) -> &[f64] {
        // from_columns guarantees presence
        self.column(TIME_COLUMN).unwrap_or(&[])
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }
}

/// How delimited files are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self { Self { delimiter: b',' } }
}

/// Where tables come from. The CLI reads CSV files; tests substitute fakes.
pub trait TableSource {
    fn load(&mut self, path: &Path) -> Result<DataTable>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CsvSource {
    pub options: LoadOptions,
}

impl CsvSource {
    pub fn new(options: LoadOptions) -> Self { Self { options } }
}

impl TableSource for CsvSource {
    fn load(&mut self, path: &Path) -> Result<DataTable> {
        load(path, &self.options)
    }
}

/// Read the whole delimited file at `path`: a header row, then numeric rows.
/// The file handle is closed before returning.
pub fn load(path: &Path, opts: &LoadOptions) -> Result<DataTable> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PlotError::FileNotFound { path: path.to_path_buf() },
        _ => PlotError::Io { path: path.to_path_buf(), source },
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .trim(csv::Trim::All)
        .from_reader(file);

    let names: Vec<String> = rdr
        .headers()
        .map_err(|e| csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    if names.is_empty() {
        return Err(parse_error(path, None, "missing header row"));
    }
    if let Some(i) = names.iter().position(|n| n.is_empty()) {
        return Err(parse_error(path, Some(1), format!("header field {} is empty", i + 1)));
    }
    debug!(path = %path.display(), columns = ?names, "read header");

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for rec in rdr.records() {
        let rec = rec.map_err(|e| csv_error(path, e))?;
        let line = rec.position().map(|p| p.line());
        for ((field, col), name) in rec.iter().zip(columns.iter_mut()).zip(&names) {
            let v = field.parse::<f64>().map_err(|_| {
                parse_error(path, line, format!("column '{name}' value '{field}' is not a number"))
            })?;
            col.push(v);
        }
    }

    let table = DataTable::from_columns(names.into_iter().zip(columns).collect()).map_err(|e| match e {
        ShapeError::MissingTime => PlotError::Schema { path: path.to_path_buf(), message: e.to_string() },
        other => parse_error(path, Some(1), other.to_string()),
    })?;
    info!(path = %path.display(), rows = table.row_count(), columns = table.names.len(), "loaded table");
    Ok(table)
}

fn parse_error(path: &Path, line: Option<u64>, message: impl Into<String>) -> PlotError {
    PlotError::Parse { path: path.to_path_buf(), line, message: message.into() }
}

fn csv_error(path: &Path, err: csv::Error) -> PlotError {
    let line = err.position().map(|p| p.line());
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("row has {len} fields, header has {expected_len}")
        }
        _ => err.to_string(),
    };
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PlotError::Io { path: path.to_path_buf(), source },
        _ => parse_error(path, line, message),
    }
}
