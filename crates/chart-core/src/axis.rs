// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// Axis caption; empty means no caption is drawn.
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("time", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    /// Range width, never zero.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    pub fn has_label(&self) -> bool {
        !self.label.trim().is_empty()
    }
}
