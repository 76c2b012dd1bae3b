// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors, plus the series color cycle.

use skia_safe as skia;

/// Default series color cycle (tab10 order), used when a series has no explicit color.
const TAB10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4), // blue
    (0xff, 0x7f, 0x0e), // orange
    (0x2c, 0xa0, 0x2c), // green
    (0xd6, 0x27, 0x28), // red
    (0x94, 0x67, 0xbd), // purple
    (0x8c, 0x56, 0x4b), // brown
    (0xe3, 0x77, 0xc2), // pink
    (0x7f, 0x7f, 0x7f), // gray
    (0xbc, 0xbd, 0x22), // olive
    (0x17, 0xbe, 0xcf), // cyan
];

/// Colors a series can request by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Purple,
    Orange,
}

impl NamedColor {
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Purple => "purple",
            NamedColor::Orange => "orange",
        }
    }

    /// CSS/X11 values for the names.
    pub fn color(self) -> skia::Color {
        match self {
            NamedColor::Red => skia::Color::from_rgb(255, 0, 0),
            NamedColor::Green => skia::Color::from_rgb(0, 128, 0),
            NamedColor::Blue => skia::Color::from_rgb(0, 0, 255),
            NamedColor::Purple => skia::Color::from_rgb(128, 0, 128),
            NamedColor::Orange => skia::Color::from_rgb(255, 165, 0),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        [Self::Red, Self::Green, Self::Blue, Self::Purple, Self::Orange]
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub crosshair: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            legend_fill: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 232, 232, 236),
            axis_line: skia::Color::from_argb(255, 40, 40, 40),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 70, 70, 80),
            title: skia::Color::from_argb(255, 0, 0, 0),
            legend_fill: skia::Color::from_argb(220, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
            crosshair: skia::Color::from_argb(255, 30, 120, 240),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            tick: skia::Color::from_argb(255, 0x83, 0x94, 0x96),       // base0
            title: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),      // base3
            legend_fill: skia::Color::from_argb(220, 0x07, 0x36, 0x42),
            legend_border: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),
            crosshair: skia::Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83), // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            title: skia::Color::from_argb(255, 0x00, 0x2b, 0x36),
            legend_fill: skia::Color::from_argb(220, 0xee, 0xe8, 0xd5),
            legend_border: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),
            crosshair: skia::Color::from_argb(255, 0xcb, 0x4b, 0x16),  // orange
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_fill: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            legend_border: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            crosshair: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }

    /// Color for the `index`-th series when it does not name one.
    pub fn cycle_color(&self, index: usize) -> skia::Color {
        let (r, g, b) = TAB10[index % TAB10.len()];
        skia::Color::from_rgb(r, g, b)
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
