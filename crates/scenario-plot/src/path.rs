// File: crates/scenario-plot/src/path.rs
// Summary: Data file location for a scenario run: build output directory plus file name.

use std::path::PathBuf;

use crate::registry::ScenarioRecipe;

/// Build output directories are named `cmake-build-<mode>`.
pub const BUILD_DIR_PREFIX: &str = "cmake-build-";

/// Mode used when none is given on the command line.
pub const DEFAULT_BUILD_MODE: &str = "debug";

/// `cmake-build-<mode>/<file>`, where `<file>` is the override or the recipe default.
/// Pure string construction; whether the file exists is the loader's concern.
pub fn resolve(mode: &str, filename_override: Option<&str>, recipe: &ScenarioRecipe) -> PathBuf {
    let file = filename_override.unwrap_or(recipe.default_filename);
    PathBuf::from(format!("{BUILD_DIR_PREFIX}{mode}/{file}"))
}
