// File: crates/scenario-plot/src/cli.rs
// Summary: Command dispatch: arguments -> run configuration -> load -> render -> exit status.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::config::{Cli, RunConfig};
use crate::error::Result;
use crate::path;
use crate::registry::Registry;
use crate::render::{self, Presenter, RenderSettings, WindowPresenter};
use crate::table::{CsvSource, LoadOptions, TableSource};

/// Exit status for any pipeline failure.
pub const EXIT_FAILURE: u8 = 1;

/// Binary entry: CSV files in, desktop window out.
pub fn dispatch<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ExitCode::from(dispatch_with(args, CsvSource::new, &mut WindowPresenter))
}

/// Parse `args` (program name first), run the pipeline, and return the exit status.
/// The table source is built from the parsed load options.
pub fn dispatch_with<I, T, S>(args: I, make_source: impl FnOnce(LoadOptions) -> S, presenter: &mut dyn Presenter) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: TableSource,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, with status 0
            let _ = e.print();
            return e.exit_code().clamp(0, u8::MAX as i32) as u8;
        }
    };
    crate::logging::init_tracing(cli.verbose);

    let registry = Registry::builtin();
    if cli.list {
        print!("{}", list_scenarios(&registry));
        return 0;
    }

    let config = cli.run_config();
    let mut source = make_source(cli.load_options());
    match run(&config, &registry, &mut source, &cli.render_settings(), presenter) {
        Ok(()) => 0,
        Err(e) => {
            error!(scenario = %config.scenario, "{e}");
            eprintln!("error: {e}");
            EXIT_FAILURE
        }
    }
}

/// The pipeline: look up the recipe, resolve the path, load the table, render it.
/// Nothing is loaded for an unknown scenario.
pub fn run(
    config: &RunConfig,
    registry: &Registry,
    source: &mut dyn TableSource,
    settings: &RenderSettings,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let recipe = registry.lookup(&config.scenario)?;
    let path = path::resolve(&config.build_mode, config.filename_override.as_deref(), recipe);
    info!(scenario = recipe.key, mode = %config.build_mode, path = %path.display(), "resolved data file");

    let table = source.load(&path)?;
    render::render(&table, recipe, settings, presenter)
}

/// One line per scenario: key, title, default data file.
pub fn list_scenarios(registry: &Registry) -> String {
    let width = registry.keys().iter().map(|k| k.len()).max().unwrap_or(0);
    registry
        .recipes()
        .iter()
        .map(|r| format!("{:<width$}  {}  ({})\n", r.key, r.title, r.default_filename))
        .collect()
}
