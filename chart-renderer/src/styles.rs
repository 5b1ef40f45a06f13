use plotters::style::{RGBAColor, RGBColor};

/// Slice colours, cycled when there are more entries than colours.
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Chart theme configuration
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
    pub bar_color: RGBColor,
    /// Percentage labels drawn inside pie slices.
    pub slice_text_color: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(0, 0, 0, 0.85),
            grid_color: RGBAColor(0, 0, 0, 0.15),
            axis_color: RGBAColor(0, 0, 0, 0.8),
            bar_color: PALETTE[0],
            slice_text_color: RGBAColor(255, 255, 255, 1.0),
        }
    }
}

/// Chart style configuration
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Bar chart canvas (width, height) in pixels.
    pub bar_size: (u32, u32),
    /// Pie chart canvas (width, height) in pixels.
    pub pie_size: (u32, u32),
    pub font_size: u32,
    pub title_font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
    /// Gap on each side of a bar, in pixels.
    pub bar_margin: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_size: (1000, 500),
            pie_size: (800, 800),
            font_size: 15,
            title_font_size: 28,
            margin: 15,
            label_area_size: 50,
            bar_margin: 8,
        }
    }
}
