// File: crates/scenario-plot/src/config.rs
// Summary: Command-line surface and the run configuration values built from it.

use chart_core::{theme, types};
use clap::Parser;

use crate::path::DEFAULT_BUILD_MODE;
use crate::registry::DEFAULT_SCENARIO;
use crate::render::{RenderSettings, DEFAULT_MAX_POINTS};
use crate::table::LoadOptions;

#[derive(Debug, Parser)]
#[command(name = "scenario-plot", version, about = "Plot simulator scenario output as time-series charts")]
pub struct Cli {
    /// Scenario to plot: intro, covid, cir or covid-delay [default: intro]
    pub scenario: Option<String>,

    /// Build mode; data is read from `cmake-build-<MODE>/` [default: debug]
    pub mode: Option<String>,

    /// Data file name, replacing the scenario's default file
    pub filename: Option<String>,

    /// List the registered scenarios and exit
    #[arg(long)]
    pub list: bool,

    /// Chart theme: light, dark, solarized-dark, solarized-light, high-contrast-dark
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Field delimiter of the data file (single ASCII character)
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Longest series drawn as-is; longer ones are downsampled for display (0 = never)
    #[arg(long, default_value_t = DEFAULT_MAX_POINTS)]
    pub max_points: usize,

    /// Window width in pixels
    #[arg(long, default_value_t = types::WIDTH as u32, value_parser = clap::value_parser!(u32).range(64..))]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = types::HEIGHT as u32, value_parser = clap::value_parser!(u32).range(64..))]
    pub height: u32,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ if s == "\\t" => Ok(b'\t'),
        _ => Err(format!("expected a single ASCII character, got '{s}'")),
    }
}

/// What to plot: scenario, build mode and optional data file override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub scenario: String,
    pub build_mode: String,
    pub filename_override: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl RunConfig {
    pub fn new(scenario: Option<String>, build_mode: Option<String>, filename_override: Option<String>) -> Self {
        Self {
            scenario: scenario.unwrap_or_else(|| DEFAULT_SCENARIO.to_string()),
            build_mode: build_mode.unwrap_or_else(|| DEFAULT_BUILD_MODE.to_string()),
            filename_override,
        }
    }
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.scenario.clone(), self.mode.clone(), self.filename.clone())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { delimiter: self.delimiter }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            theme: theme::find(&self.theme),
            width: self.width as i32,
            height: self.height as i32,
            max_points: self.max_points,
        }
    }
}
