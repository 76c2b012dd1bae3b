// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic small charts to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{Axis, Chart, NamedColor, RenderOptions, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(chart: &Chart) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_basic_chart() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::line("line", vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.5), (4.0, 1.0)]));
    write_or_compare("basic_chart.png", &render_bytes(&chart));
}

#[test]
fn golden_three_series_with_legend() {
    let mut chart = Chart::new();
    chart.show_legend = true;
    let colors = [NamedColor::Red, NamedColor::Green, NamedColor::Blue];
    for (k, (name, color)) in ["A", "B", "C"].into_iter().zip(colors).enumerate() {
        let data = (0..10).map(|i| (i as f64, (i as f64 * 0.5 + k as f64).sin() * 10.0 + 20.0)).collect();
        chart.add_series(Series::line(name, data).with_color(color.color()));
    }
    chart.autoscale_axes(0.02);
    write_or_compare("three_series_legend.png", &render_bytes(&chart));
}
