// File: crates/scenario-plot/src/render.rs
// Summary: Turns a loaded table plus a scenario recipe into a chart and hands it to a presenter.

use chart_core::view::DEFAULT_Y_MARGIN;
use chart_core::{types, Chart, RenderOptions, Series, Theme};
use tracing::{debug, info};

use crate::error::{PlotError, Result};
use crate::registry::ScenarioRecipe;
use crate::table::DataTable;

/// Per-series point cap before display downsampling kicks in.
pub const DEFAULT_MAX_POINTS: usize = 4000;

#[derive(Clone, Copy, Debug)]
pub struct RenderSettings {
    pub theme: Theme,
    pub width: i32,
    pub height: i32,
    /// 0 disables downsampling.
    pub max_points: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { theme: Theme::default(), width: types::WIDTH, height: types::HEIGHT, max_points: DEFAULT_MAX_POINTS }
    }
}

impl RenderSettings {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions { width: self.width, height: self.height, theme: self.theme, ..RenderOptions::default() }
    }
}

/// Displays a finished chart; returns once the user is done with it.
pub trait Presenter {
    fn present(&mut self, chart: Chart, opts: RenderOptions, title: &str) -> anyhow::Result<()>;
}

/// Shows charts in a blocking desktop window.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowPresenter;

impl Presenter for WindowPresenter {
    fn present(&mut self, chart: Chart, opts: RenderOptions, title: &str) -> anyhow::Result<()> {
        chart_window::show(chart, opts, title)
    }
}

/// Build the chart for `recipe` from `table`, one line per series in recipe order,
/// each plotted against `time` with its scale applied.
///
/// Every column is resolved before anything is returned, so a missing column yields
/// `PlotError::Render` and no partial chart.
pub fn build_chart(table: &DataTable, recipe: &ScenarioRecipe, settings: &RenderSettings) -> Result<Chart> {
    let time = table.time();

    let mut chart = Chart::new();
    chart.title = recipe.title.to_string();
    chart.x_axis.label = recipe.x_label.to_string();
    chart.y_axis.label = recipe.y_label.to_string();
    chart.show_legend = true;

    for spec in recipe.series {
        let ys = table.column(spec.column).ok_or_else(|| PlotError::Render {
            scenario: recipe.key.to_string(),
            column: spec.column.to_string(),
        })?;
        let data = time.iter().copied().zip(ys.iter().copied()).collect();
        let mut series = Series::line(spec.label, data).scale_y(spec.scale);
        if let Some(color) = spec.color {
            series = series.with_color(color.color());
        }
        chart.add_series(series);
    }

    // Fit to the full data; downsampling below is for drawing only.
    chart.autoscale_axes(DEFAULT_Y_MARGIN);

    if settings.max_points > 0 {
        for series in &mut chart.series {
            if series.data_xy.len() > settings.max_points {
                debug!(series = %series.label, from = series.data_xy.len(), to = settings.max_points, "downsampling");
                *series = series.downsample_xy_lttb(settings.max_points);
            }
        }
    }
    Ok(chart)
}

/// Build the chart for `recipe` and present it; blocks while the presenter does.
pub fn render(
    table: &DataTable,
    recipe: &ScenarioRecipe,
    settings: &RenderSettings,
    presenter: &mut dyn Presenter,
) -> Result<()> {
    let chart = build_chart(table, recipe, settings)?;
    info!(scenario = recipe.key, series = chart.series.len(), "presenting chart");
    presenter
        .present(chart, settings.render_options(), recipe.title)
        .map_err(|e| PlotError::Display { scenario: recipe.key.to_string(), message: format!("{e:#}") })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn intro_table(rows: usize) -> DataTable {
        let t: Vec<f64> = (0..rows).map(|i| i as f64).collect();
        DataTable::from_columns(vec![
            ("time", t.clone()),
            ("A", t.iter().map(|v| v * 2.0).collect()),
            ("B", t.iter().map(|v| 100.0 - v).collect()),
            ("C", vec![3.0; rows]),
        ])
        .unwrap()
    }

    #[test]
    fn chart_carries_recipe_text() {
        let recipe = Registry::builtin().lookup("intro").unwrap();
        let chart = build_chart(&intro_table(5), recipe, &RenderSettings::default()).unwrap();
        assert_eq!(chart.title, "Introduction example");
        assert_eq!(chart.x_axis.label, "time");
        assert_eq!(chart.y_axis.label, "count");
        assert!(chart.show_legend);
    }

    #[test]
    fn axes_fit_full_data_before_downsampling() {
        let recipe = Registry::builtin().lookup("intro").unwrap();
        let settings = RenderSettings { max_points: 50, ..RenderSettings::default() };
        let chart = build_chart(&intro_table(1000), recipe, &settings).unwrap();
        assert!(chart.series.iter().all(|s| s.data_xy.len() == 50));
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 999.0));
        assert!(chart.y_axis.max >= 1998.0);
    }

    #[test]
    fn zero_max_points_keeps_everything() {
        let recipe = Registry::builtin().lookup("intro").unwrap();
        let settings = RenderSettings { max_points: 0, ..RenderSettings::default() };
        let chart = build_chart(&intro_table(5000), recipe, &settings).unwrap();
        assert!(chart.series.iter().all(|s| s.data_xy.len() == 5000));
    }

    #[test]
    fn settings_map_to_render_options() {
        let s = RenderSettings { width: 300, height: 200, theme: Theme::dark(), max_points: 10 };
        let o = s.render_options();
        assert_eq!((o.width, o.height, o.theme.name), (300, 200, "dark"));
        assert!(o.draw_labels);
    }
}
