// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::series::{Bounds, Series};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, PlotRect, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const TITLE_SIZE: f32 = 18.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const LEGEND_SIZE: f32 = 13.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, labels, ticks, legend entries) is skipped when false.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_legend: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Extents over every series' finite points.
    pub fn data_bounds(&self) -> Option<Bounds> {
        self.series
            .iter()
            .filter_map(Series::bounds)
            .reduce(Bounds::union)
    }

    /// Fit both axes to the data, padding y by `y_margin` (fraction of the span).
    pub fn autoscale_axes(&mut self, y_margin: f64) {
        ViewState::fit(self, y_margin).apply_to_chart(self);
    }

    /// Stroke color of the series at `index`: its own, else the theme cycle.
    pub fn series_color(&self, index: usize, theme: &Theme) -> skia::Color {
        self.series
            .get(index)
            .and_then(|s| s.color)
            .unwrap_or_else(|| theme.cycle_color(index))
    }

    /// Render into a tightly packed RGBA8 buffer.
    /// Returns (pixels, width, height, row_bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (opts.width.max(1), opts.height.max(1));
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None);
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.paint(surface.canvas(), opts);

        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} raster pixels failed");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width.max(1), opts.height.max(1)))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .context("encode PNG failed")?;
        Ok(data.as_bytes().to_vec())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = PlotRect::new(opts.width, opts.height, &opts.insets);
        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, &rect, &self.x_axis, &self.y_axis, theme);

        // Lines are clipped so zoomed/panned views never spill into the margins.
        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32),
            None,
            Some(true),
        );
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &rect, &self.x_axis, &self.y_axis, s, self.series_color(i, theme));
        }
        canvas.restore();

        draw_axes(canvas, &rect, theme);

        if let Some(shaper) = &shaper {
            draw_ticks(canvas, shaper, &rect, &self.x_axis, &self.y_axis, theme);
            draw_captions(canvas, shaper, &rect, opts, &self.title, &self.x_axis, &self.y_axis);
        }
        if self.show_legend && !self.series.is_empty() {
            self.draw_legend(canvas, shaper.as_ref(), &rect, theme);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, shaper: Option<&TextShaper>, rect: &PlotRect, theme: &Theme) {
        let pad = 8.0f32;
        let swatch = 22.0f32;
        let row_h = LEGEND_SIZE + 8.0;
        let text_w = shaper
            .map(|sh| {
                self.series
                    .iter()
                    .map(|s| sh.measure_width(&s.label, LEGEND_SIZE, false))
                    .fold(0.0f32, f32::max)
            })
            .unwrap_or(0.0);

        let box_w = pad * 3.0 + swatch + text_w;
        let box_h = pad * 2.0 + row_h * self.series.len() as f32;
        let right = rect.right as f32 - 10.0;
        let top = rect.top as f32 + 10.0;
        let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_fill);
        canvas.draw_round_rect(frame, 4.0, 4.0, &fill);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_round_rect(frame, 4.0, 4.0, &border);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_stroke_width(2.0);

        for (i, s) in self.series.iter().enumerate() {
            let mid = frame.top + pad + row_h * (i as f32 + 0.5);
            let x0 = frame.left + pad;
            stroke.set_color(self.series_color(i, theme));
            canvas.draw_line((x0, mid), (x0 + swatch, mid), &stroke);
            if let Some(sh) = shaper {
                sh.draw_left(canvas, &s.label, x0 + swatch + pad, mid + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label, false);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_px_x(x: f64, rect: &PlotRect, axis: &Axis) -> f32 {
    rect.left as f32 + ((x - axis.min) / axis.span()) as f32 * rect.width() as f32
}

fn to_px_y(y: f64, rect: &PlotRect, axis: &Axis) -> f32 {
    rect.bottom as f32 - ((y - axis.min) / axis.span()) as f32 * rect.height() as f32
}

fn draw_grid(canvas: &skia::Canvas, rect: &PlotRect, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    // verticals
    for v in nice_ticks(x.min, x.max, 8) {
        let px = to_px_x(v, rect, x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for v in nice_ticks(y.min, y.max, 6) {
        let py = to_px_y(v, rect, y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, rect: &PlotRect, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.5);

    let frame = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    canvas.draw_rect(frame, &axis_paint);
}

fn draw_ticks(canvas: &skia::Canvas, shaper: &TextShaper, rect: &PlotRect, x: &Axis, y: &Axis, theme: &Theme) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.axis_line);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let (l, b) = (rect.left as f32, rect.bottom as f32);

    let x_step = nice_step(x.min, x.max, 8);
    for v in nice_ticks(x.min, x.max, 8) {
        let px = to_px_x(v, rect, x);
        canvas.draw_line((px, b), (px, b + 5.0), &tick_paint);
        shaper.draw(canvas, &format_tick(v, x_step), px, b + 20.0, TICK_SIZE, theme.tick, true, Anchor::Center);
    }

    let y_step = nice_step(y.min, y.max, 6);
    for v in nice_ticks(y.min, y.max, 6) {
        let py = to_px_y(v, rect, y);
        canvas.draw_line((l - 5.0, py), (l, py), &tick_paint);
        shaper.draw(canvas, &format_tick(v, y_step), l - 8.0, py + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, true, Anchor::Right);
    }
}

fn draw_captions(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    rect: &PlotRect,
    opts: &RenderOptions,
    title: &str,
    x: &Axis,
    y: &Axis,
) {
    let theme = &opts.theme;
    let center_x = (rect.left + rect.right) as f32 * 0.5;
    if !title.trim().is_empty() {
        shaper.draw(canvas, title, center_x, rect.top as f32 - 16.0, TITLE_SIZE, theme.title, false, Anchor::Center);
    }
    if x.has_label() {
        shaper.draw(canvas, &x.label, center_x, opts.height as f32 - 14.0, LABEL_SIZE, theme.axis_label, false, Anchor::Center);
    }
    if y.has_label() {
        let center_y = (rect.top + rect.bottom) as f32 * 0.5;
        shaper.draw_vertical(canvas, &y.label, 20.0, center_y, LABEL_SIZE, theme.axis_label);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    // Non-finite samples break the line instead of being drawn through.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for &(x, y) in data {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (to_px_x(x, rect, x_axis), to_px_y(y, rect, y_axis));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}
