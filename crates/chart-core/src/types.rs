// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    // Top leaves room for the title, bottom and left for tick labels plus axis labels.
    fn default() -> Self {
        Self::new(84, 32, 48, 64)
    }
}

/// Plot rectangle in pixels, derived from a surface size and insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotRect {
    pub fn new(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        // Never let the rect invert on tiny surfaces.
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_rect_subtracts_insets() {
        let r = PlotRect::new(WIDTH, HEIGHT, &Insets::default());
        assert_eq!(r.left, 84);
        assert_eq!(r.top, 48);
        assert_eq!(r.width() as u32, WIDTH as u32 - Insets::default().hsum());
        assert_eq!(r.height() as u32, HEIGHT as u32 - Insets::default().vsum());
    }

    #[test]
    fn plot_rect_never_inverts() {
        let r = PlotRect::new(10, 10, &Insets::default());
        assert!(r.width() >= 1);
        assert!(r.height() >= 1);
    }
}
