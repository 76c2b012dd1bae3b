// File: crates/chart-core/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale.

use crate::Chart;
use crate::types::Insets;

/// Fraction of the y span added above and below the data by default.
pub const DEFAULT_Y_MARGIN: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data extents of `chart` with the default y margin.
    pub fn from_chart(chart: &Chart) -> Self {
        Self::fit(chart, DEFAULT_Y_MARGIN)
    }

    /// Data extents of `chart`, y padded by `y_margin` of its span.
    /// Empty charts get the unit square; zero-width spans are widened to 1.
    pub fn fit(chart: &Chart, y_margin: f64) -> Self {
        let Some(b) = chart.data_bounds() else {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        };
        let (x_min, mut x_max) = (b.x_min, b.x_max);
        let (mut y_min, mut y_max) = (b.y_min, b.y_max);
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 {
            y_min -= 0.5;
            y_max += 0.5;
        }
        let ym = (y_max - y_min) * y_margin.max(0.0);
        Self { x_min, x_max, y_min: y_min - ym, y_max: y_max + ym }
    }

    /// The ranges the chart's axes currently show.
    pub fn from_axes(chart: &Chart) -> Self {
        Self {
            x_min: chart.x_axis.min,
            x_max: chart.x_axis.max,
            y_min: chart.y_axis.min,
            y_max: chart.y_axis.max,
        }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let plot_w = ((width - insets.right as i32 - insets.left as i32) as f64).max(1.0);
        let plot_h = ((height - insets.bottom as i32 - insets.top as i32) as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        // screen y grows downward, world y upward
        let wy = dy / plot_h * y_span;
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom around the world point under the cursor; positive `scroll` zooms in.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let w = width as f64; let h = height as f64;
        let l = insets.left as f64; let rpx = (w - insets.right as f64).max(l + 1.0);
        let t = insets.top as f64; let bpx = (h - insets.bottom as f64).max(t + 1.0);
        let plot_w = rpx - l; let plot_h = bpx - t;
        let cx = cursor_x.clamp(l, rpx); let cy = cursor_y.clamp(t, bpx);
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }

    /// Refit y to the data inside the current x window. Returns false if none is visible.
    pub fn autoscale_y_visible(&mut self, chart: &Chart) -> bool {
        if let Some((ymin, ymax)) = visible_y_range(chart, self.x_min, self.x_max) {
            let span = (ymax - ymin).max(1e-9);
            let m = span * DEFAULT_Y_MARGIN;
            self.y_min = ymin - m;
            self.y_max = ymin + span + m;
            true
        } else { false }
    }
}

pub fn visible_y_range(chart: &Chart, x_min: f64, x_max: f64) -> Option<(f64, f64)> {
    chart
        .series
        .iter()
        .flat_map(|s| s.data_xy.iter())
        .filter(|&&(x, y)| x >= x_min && x <= x_max && y.is_finite())
        .fold(None, |acc, &(_, y)| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Series;

    fn chart_with(data: Vec<(f64, f64)>) -> Chart {
        let mut c = Chart::new();
        c.add_series(Series::line("s", data));
        c
    }

    #[test]
    fn fit_pads_y_only() {
        let c = chart_with(vec![(0.0, 0.0), (10.0, 100.0)]);
        let v = ViewState::fit(&c, 0.1);
        assert_eq!((v.x_min, v.x_max), (0.0, 10.0));
        assert!((v.y_min + 10.0).abs() < 1e-9);
        assert!((v.y_max - 110.0).abs() < 1e-9);
    }

    #[test]
    fn fit_handles_empty_and_flat() {
        let v = ViewState::fit(&Chart::new(), 0.02);
        assert_eq!(v, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });

        let flat = ViewState::fit(&chart_with(vec![(2.0, 5.0), (2.0, 5.0)]), 0.0);
        assert_eq!((flat.x_min, flat.x_max), (2.0, 3.0));
        assert_eq!((flat.y_min, flat.y_max), (4.5, 5.5));
    }

    #[test]
    fn pan_moves_both_ends_equally() {
        let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
        let insets = Insets::new(0, 0, 0, 0);
        v.pan_by_pixels(-100.0, 0.0, 1000, 1000, &insets);
        assert!((v.x_min - 1.0).abs() < 1e-9);
        assert!((v.x_max - 11.0).abs() < 1e-9);
        assert_eq!((v.y_min, v.y_max), (0.0, 10.0));
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mut v = ViewState { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 10.0 };
        let insets = Insets::new(0, 0, 0, 0);
        // cursor at world (2.5, 7.5)
        v.zoom_at_pixel(0.5, 250.0, 250.0, 1000, 1000, &insets);
        assert!((v.x_max - v.x_min - 5.0).abs() < 1e-9);
        let wx = v.x_min + 0.25 * (v.x_max - v.x_min);
        let wy = v.y_max - 0.25 * (v.y_max - v.y_min);
        assert!((wx - 2.5).abs() < 1e-9);
        assert!((wy - 7.5).abs() < 1e-9);
    }

    #[test]
    fn autoscale_uses_visible_window() {
        let c = chart_with(vec![(0.0, 100.0), (1.0, 1.0), (2.0, 3.0), (3.0, -50.0)]);
        let mut v = ViewState { x_min: 0.5, x_max: 2.5, y_min: 0.0, y_max: 1.0 };
        assert!(v.autoscale_y_visible(&c));
        assert!(v.y_min < 1.0 && v.y_min > 0.9);
        assert!(v.y_max > 3.0 && v.y_max < 3.1);

        let mut empty = ViewState { x_min: 10.0, x_max: 20.0, y_min: 0.0, y_max: 1.0 };
        assert!(!empty.autoscale_y_visible(&c));
    }
}
