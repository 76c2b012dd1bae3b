// File: crates/chart-core/src/downsample.rs
// Summary: Downsampling utilities (LTTB for XY).

/// Largest-Triangle-Three-Buckets downsampling for XY series.
/// Returns up to `threshold` points preserving overall shape.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    // index of the point picked from the previous bucket
    let mut a = 0usize;

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = (1.0 + ((i + 1) as f64) * bucket_size).floor().min((n - 1) as f64) as usize;

        // Average of the next bucket (end..next_end); the last bucket averages the final point.
        let next_end = (1.0 + ((i + 2) as f64) * bucket_size).floor().min(n as f64) as usize;
        let rs = end.min(n - 1);
        let re = next_end.max(rs + 1).min(n);
        let count = (re - rs) as f64;
        let (sum_x, sum_y) = points[rs..re]
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        let (avg_x, avg_y) = (sum_x / count, sum_y / count);

        let (a_x, a_y) = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for k in start..end.max(start + 1) {
            // Twice the triangle area via cross product magnitude
            let area = ((a_x - points[k].0) * (avg_y - a_y) - (a_x - avg_x) * (points[k].1 - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}
