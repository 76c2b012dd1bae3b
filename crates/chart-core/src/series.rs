// File: crates/chart-core/src/series.rs
// Summary: Line series model: labeled (x, y) data with an optional explicit color.

use skia_safe as skia;

/// Data extents of one or more series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text.
    pub label: String,
    /// `None` means the theme's color cycle picks one by series position.
    pub color: Option<skia::Color>,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), color: None, data_xy: data }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Multiply every y-value by `factor`; x is untouched.
    pub fn scale_y(mut self, factor: f64) -> Self {
        if factor != 1.0 {
            for p in &mut self.data_xy {
                p.1 *= factor;
            }
        }
        self
    }

    /// Extents over finite points only; `None` if there are none.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut out: Option<Bounds> = None;
        for &(x, y) in &self.data_xy {
            if !x.is_finite() || !y.is_finite() { continue; }
            let b = Bounds { x_min: x, x_max: x, y_min: y, y_max: y };
            out = Some(match out { Some(acc) => acc.union(b), None => b });
        }
        out
    }

    /// Downsample XY data using LTTB to at most `max_points`.
    pub fn downsample_xy_lttb(&self, max_points: usize) -> Self {
        use crate::downsample::lttb;
        let data = if self.data_xy.len() > max_points && max_points >= 2 {
            lttb(&self.data_xy, max_points)
        } else {
            self.data_xy.clone()
        };
        Series { label: self.label.clone(), color: self.color, data_xy: data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_y_leaves_x_alone() {
        let s = Series::line("H", vec![(0.0, 0.1), (1.0, 0.2)]).scale_y(1000.0);
        assert_eq!(s.data_xy[0].0, 0.0);
        assert_eq!(s.data_xy[1].0, 1.0);
        assert!((s.data_xy[0].1 - 100.0).abs() < 1e-9);
        assert!((s.data_xy[1].1 - 200.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let s = Series::line("a", vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, -3.0)]);
        let b = s.bounds().unwrap();
        assert_eq!(b, Bounds { x_min: 0.0, x_max: 2.0, y_min: -3.0, y_max: 1.0 });
        assert!(Series::line("empty", Vec::new()).bounds().is_none());
    }

    #[test]
    fn downsample_keeps_label_and_color() {
        let data = (0..100).map(|i| (i as f64, (i as f64).sin())).collect();
        let s = Series::line("wave", data).with_color(skia::Color::from_rgb(1, 2, 3));
        let d = s.downsample_xy_lttb(10);
        assert_eq!(d.data_xy.len(), 10);
        assert_eq!(d.label, "wave");
        assert_eq!(d.color, s.color);
        assert_eq!(s.downsample_xy_lttb(1000).data_xy.len(), 100);
    }
}
