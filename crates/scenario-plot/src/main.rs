// File: crates/scenario-plot/src/main.rs
// Summary: `scenario-plot [scenario] [mode] [filename]` - plot one scenario's simulator output.

use std::process::ExitCode;

fn main() -> ExitCode {
    scenario_plot::dispatch(std::env::args_os())
}
