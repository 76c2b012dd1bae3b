// File: crates/scenario-plot/src/registry.rs
// Summary: Static scenario registry: per-scenario data file, plotted columns, styling and titles.
// Adding a scenario means adding one recipe constant and listing it in SCENARIOS.

use chart_core::NamedColor;

use crate::error::{PlotError, Result};

/// Scenario used when no argument is given.
pub const DEFAULT_SCENARIO: &str = "intro";

/// Shared x column of every scenario's table.
pub const TIME_COLUMN: &str = "time";

/// One plotted line: which column, how it is labeled, colored and scaled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSpec {
    pub column: &'static str,
    pub label: &'static str,
    /// `None` leaves the color to the theme's cycle.
    pub color: Option<NamedColor>,
    pub scale: f64,
}

impl SeriesSpec {
    pub const fn new(column: &'static str) -> Self {
        Self { column, label: column, color: None, scale: 1.0 }
    }

    pub const fn colored(self, color: NamedColor) -> Self {
        Self { color: Some(color), ..self }
    }

    pub const fn labeled(self, label: &'static str) -> Self {
        Self { label, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }
}

/// Rendering recipe for one scenario. Empty axis labels are left off the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioRecipe {
    pub key: &'static str,
    pub default_filename: &'static str,
    pub series: &'static [SeriesSpec],
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl ScenarioRecipe {
    /// Columns the recipe reads, `time` first.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(TIME_COLUMN).chain(self.series.iter().map(|s| s.column))
    }
}

const INTRO: ScenarioRecipe = ScenarioRecipe {
    key: "intro",
    default_filename: "intro_output.csv",
    series: &[
        SeriesSpec::new("A").colored(NamedColor::Red),
        SeriesSpec::new("B").colored(NamedColor::Green),
        SeriesSpec::new("C").colored(NamedColor::Blue),
    ],
    title: "Introduction example",
    x_label: "time",
    y_label: "count",
};

// Hospitalized counts are tiny next to the rest, hence the x1000.
const COVID: ScenarioRecipe = ScenarioRecipe {
    key: "covid",
    default_filename: "covid_output.csv",
    series: &[
        SeriesSpec::new("S"),
        SeriesSpec::new("E"),
        SeriesSpec::new("I"),
        SeriesSpec::new("H").labeled("H*1000").scaled(1000.0),
        SeriesSpec::new("R"),
    ],
    title: "Covid19 graph with N=10000",
    x_label: "time, days",
    y_label: "population count",
};

const CIRCADIAN: ScenarioRecipe = ScenarioRecipe {
    key: "cir",
    default_filename: "circadian_output.csv",
    series: &[
        SeriesSpec::new("C").colored(NamedColor::Red),
        SeriesSpec::new("A").colored(NamedColor::Green),
        SeriesSpec::new("R").colored(NamedColor::Blue),
    ],
    title: "Circadian rhythm example",
    x_label: "time, hours",
    y_label: "count",
};

const COVID_DELAY: ScenarioRecipe = ScenarioRecipe {
    key: "covid-delay",
    default_filename: "covid_delay_output.csv",
    series: &[
        SeriesSpec::new("r0").colored(NamedColor::Red),
        SeriesSpec::new("r1").colored(NamedColor::Green),
        SeriesSpec::new("r2").colored(NamedColor::Blue),
        SeriesSpec::new("r3").colored(NamedColor::Purple),
        SeriesSpec::new("r4").colored(NamedColor::Orange),
    ],
    title: "Covid delay",
    x_label: "",
    y_label: "",
};

/// Every registered scenario, in listing order.
pub static SCENARIOS: &[ScenarioRecipe] = &[INTRO, COVID, CIRCADIAN, COVID_DELAY];

/// Read-only view over a recipe table.
#[derive(Clone, Copy, Debug)]
pub struct Registry {
    recipes: &'static [ScenarioRecipe],
}

impl Default for Registry {
    fn default() -> Self { Self::builtin() }
}

impl Registry {
    pub const fn builtin() -> Self {
        Self { recipes: SCENARIOS }
    }

    pub fn lookup(&self, key: &str) -> Result<&'static ScenarioRecipe> {
        self.recipes
            .iter()
            .find(|r| r.key == key)
            .ok_or_else(|| PlotError::UnknownScenario { key: key.to_string(), known: self.keys().join(", ") })
    }

    pub fn keys(&self) -> Vec<&'static str> {
        self.recipes.iter().map(|r| r.key).collect()
    }

    pub fn recipes(&self) -> &'static [ScenarioRecipe] {
        self.recipes
    }
}
