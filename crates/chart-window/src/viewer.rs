// File: crates/chart-window/src/viewer.rs
// Summary: Window-independent viewer state: pan/zoom/reset over a chart, frame composition.

use anyhow::Result;
use chart_core::types::PlotRect;
use chart_core::{Chart, RenderOptions, ViewState};

/// Wheel "lines" to zoom fraction.
const LINE_ZOOM: f64 = 0.1;
/// Trackpad pixels per full zoom step.
const PIXEL_ZOOM: f64 = 240.0;

/// Pack RGBA8 into softbuffer's 0RGB u32 layout.
#[inline]
pub fn rgba_to_0rgb(px: &[u8]) -> u32 {
    ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
}

pub struct Viewer {
    chart: Chart,
    opts: RenderOptions,
    home: ViewState,
    view: ViewState,
    cursor: Option<(f64, f64)>,
    drag_from: Option<(f64, f64)>,
}

impl Viewer {
    /// Start at the ranges the chart's axes already show; `reset` returns there.
    pub fn new(chart: Chart, opts: RenderOptions) -> Self {
        let home = ViewState::from_axes(&chart);
        Self { chart, opts, home, view: home, cursor: None, drag_from: None }
    }

    pub fn view(&self) -> ViewState { self.view }

    pub fn size(&self) -> (u32, u32) {
        (self.opts.width.max(1) as u32, self.opts.height.max(1) as u32)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.opts.width = width.max(1) as i32;
        self.opts.height = height.max(1) as i32;
    }

    /// Track the cursor; while dragging, pan by the movement.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((px, py)) = self.drag_from {
            self.view.pan_by_pixels(x - px, y - py, self.opts.width, self.opts.height, &self.opts.insets);
            self.drag_from = Some((x, y));
        }
        self.cursor = Some((x, y));
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.drag_from = None;
    }

    pub fn begin_drag(&mut self) {
        self.drag_from = self.cursor;
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Zoom by wheel lines around the cursor (plot center if the cursor is unknown).
    pub fn scroll_lines(&mut self, lines: f64) {
        self.zoom(lines * LINE_ZOOM);
    }

    pub fn scroll_pixels(&mut self, pixels: f64) {
        self.zoom(pixels / PIXEL_ZOOM);
    }

    fn zoom(&mut self, amount: f64) {
        let (cx, cy) = self.cursor.unwrap_or_else(|| {
            let r = self.plot_rect();
            ((r.left + r.right) as f64 * 0.5, (r.top + r.bottom) as f64 * 0.5)
        });
        self.view.zoom_at_pixel(amount, cx, cy, self.opts.width, self.opts.height, &self.opts.insets);
    }

    pub fn reset(&mut self) {
        self.view = self.home;
    }

    /// Refit y to what is visible in the current x window.
    pub fn fit_y(&mut self) -> bool {
        self.view.autoscale_y_visible(&self.chart)
    }

    fn plot_rect(&self) -> PlotRect {
        PlotRect::new(self.opts.width, self.opts.height, &self.opts.insets)
    }

    /// Render the current view into 0RGB pixels, with a crosshair under the cursor.
    pub fn frame(&mut self) -> Result<Vec<u32>> {
        self.view.apply_to_chart(&mut self.chart);
        let (rgba, w, h, _) = self.chart.render_to_rgba8(&self.opts)?;
        let mut out: Vec<u32> = rgba.chunks_exact(4).map(rgba_to_0rgb).collect();

        if let Some((cx, cy)) = self.cursor {
            let rect = self.plot_rect();
            // Tiny windows can push the plot rect past the surface.
            let (right, bottom) = (rect.right.min(w as i32), rect.bottom.min(h as i32));
            let (ix, iy) = (cx.round() as i32, cy.round() as i32);
            let inside = ix >= rect.left && ix < right && iy >= rect.top && iy < bottom;
            if inside {
                let color = rgba_to_0rgb(&{
                    let c = self.opts.theme.crosshair;
                    [c.r(), c.g(), c.b(), 255]
                });
                let w = w as usize;
                for x in rect.left..right {
                    out[iy as usize * w + x as usize] = color;
                }
                for y in rect.top..bottom {
                    out[y as usize * w + ix as usize] = color;
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::{Axis, Series};

    fn viewer() -> Viewer {
        let mut chart = Chart::new();
        chart.x_axis = Axis::new("time", 0.0, 10.0);
        chart.y_axis = Axis::new("count", 0.0, 10.0);
        chart.add_series(Series::line("a", (0..=10).map(|i| (i as f64, i as f64)).collect()));
        let mut opts = RenderOptions::default();
        opts.width = 320;
        opts.height = 200;
        opts.draw_labels = false;
        Viewer::new(chart, opts)
    }

    #[test]
    fn packs_rgb_ignoring_alpha() {
        assert_eq!(rgba_to_0rgb(&[0x12, 0x34, 0x56, 0x78]), 0x0012_3456);
    }

    #[test]
    fn drag_pans_and_reset_restores() {
        let mut v = viewer();
        let home = v.view();
        v.cursor_moved(150.0, 100.0);
        v.begin_drag();
        v.cursor_moved(100.0, 100.0);
        v.end_drag();
        assert!(v.view().x_min > home.x_min, "dragging left moves the window right");
        assert_eq!(v.view().y_min, home.y_min);

        // moving without a drag does not pan
        let before = v.view();
        v.cursor_moved(10.0, 10.0);
        assert_eq!(v.view(), before);

        v.reset();
        assert_eq!(v.view(), home);
    }

    #[test]
    fn wheel_zooms_in_and_out() {
        let mut v = viewer();
        let home = v.view();
        v.scroll_lines(2.0);
        assert!(v.view().x_max - v.view().x_min < home.x_max - home.x_min);
        v.reset();
        v.scroll_pixels(-240.0);
        assert!(v.view().x_max - v.view().x_min > home.x_max - home.x_min);
    }

    #[test]
    fn frame_matches_window_size() {
        let mut v = viewer();
        v.resize(200, 150);
        let f = v.frame().expect("frame");
        assert_eq!(f.len(), 200 * 150);
    }

    #[test]
    fn crosshair_drawn_only_inside_plot() {
        let mut v = viewer();
        let (w, _) = v.size();
        let cross = {
            let c = chart_core::Theme::light().crosshair;
            rgba_to_0rgb(&[c.r(), c.g(), c.b(), 255])
        };
        v.cursor_moved(150.0, 100.0);
        let f = v.frame().expect("frame");
        assert_eq!(f[100 * w as usize + 150], cross);

        v.cursor_moved(2.0, 2.0);
        let f = v.frame().expect("frame");
        assert_ne!(f[2 * w as usize + 2], cross);
    }
}
