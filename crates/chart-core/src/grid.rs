// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Round tick step (1, 2, 5 times a power of ten) giving roughly `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 { 1.0 } else if norm < 3.0 { 2.0 } else if norm < 7.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick positions that are multiples of `nice_step` and lie within [min, max].
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, target);
    let first = (lo / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    // Small epsilon so an endpoint that is itself a multiple is kept.
    while v <= hi + step * 1e-9 && out.len() < 64 {
        // Snap -0.0 and float noise around zero.
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        v += step;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    let abs = v.abs();
    if abs != 0.0 && (abs >= 1e6 || abs < 1e-4) {
        return format!("{v:.1e}");
    }
    format!("{v:.decimals$}")
}
