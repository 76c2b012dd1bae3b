// File: crates/scenario-plot/tests/common/mod.rs
// Purpose: Shared fakes for pipeline tests: a recording table source and presenter.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chart_core::{Chart, RenderOptions};
use scenario_plot::{CsvSource, DataTable, LoadOptions, PlotError, Presenter, TableSource};

/// Serves one fixed table (or error) and records every path it was asked for.
pub struct FakeSource {
    pub table: Option<DataTable>,
    pub requested: Vec<PathBuf>,
}

impl FakeSource {
    pub fn serving(table: DataTable) -> Self {
        Self { table: Some(table), requested: Vec::new() }
    }

    pub fn missing() -> Self {
        Self { table: None, requested: Vec::new() }
    }
}

impl TableSource for FakeSource {
    fn load(&mut self, path: &Path) -> Result<DataTable, PlotError> {
        self.requested.push(path.to_path_buf());
        self.table.clone().ok_or_else(|| PlotError::FileNotFound { path: path.to_path_buf() })
    }
}

/// Reads CSV from under `root`, so relative build paths resolve inside a fixture tree.
pub struct RootedCsv {
    pub root: PathBuf,
    pub inner: CsvSource,
}

impl RootedCsv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), inner: CsvSource::new(LoadOptions::default()) }
    }
}

impl TableSource for RootedCsv {
    fn load(&mut self, path: &Path) -> Result<DataTable, PlotError> {
        self.inner.load(&self.root.join(path))
    }
}

/// Keeps presented charts instead of opening a window.
#[derive(Default)]
pub struct RecordingPresenter {
    pub shown: Vec<(Chart, String)>,
    pub fail_with: Option<String>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, chart: Chart, _opts: RenderOptions, title: &str) -> anyhow::Result<()> {
        if let Some(msg) = &self.fail_with {
            anyhow::bail!("{msg}");
        }
        self.shown.push((chart, title.to_string()));
        Ok(())
    }
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

pub fn table<const N: usize>(columns: &[(&str, [f64; N])]) -> DataTable {
    DataTable::from_columns(columns.iter().map(|(n, v)| (*n, v.to_vec())).collect()).expect("valid table")
}
