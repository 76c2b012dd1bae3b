// File: crates/scenario-plot/src/lib.rs
// Summary: Scenario plotting pipeline: CLI dispatch, scenario registry, path resolution,
// CSV loading and chart rendering.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod registry;
pub mod render;
pub mod table;

pub use cli::{dispatch, dispatch_with, run};
pub use config::{Cli, RunConfig};
pub use error::PlotError;
pub use registry::{Registry, ScenarioRecipe, SeriesSpec};
pub use render::{build_chart, Presenter, RenderSettings, WindowPresenter};
pub use table::{CsvSource, DataTable, LoadOptions, TableSource};
