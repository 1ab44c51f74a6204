use plotters::style::RGBColor;

pub const BACKGROUND: RGBColor = RGBColor(0x1a, 0x1a, 0x1a);
pub const LEGEND_BACKGROUND: RGBColor = RGBColor(0x2a, 0x2a, 0x2a);
pub const GRID: RGBColor = RGBColor(0x40, 0x40, 0x40);
pub const CURVE: RGBColor = RGBColor(0x00, 0xff, 0x88);
pub const MARKER: RGBColor = RGBColor(0xff, 0x6b, 0x6b);
pub const FOREGROUND: RGBColor = RGBColor(0xff, 0xff, 0xff);

pub const FONT_FAMILY: &str = "sans-serif";
pub const TITLE_FONT_SIZE: f64 = 24.0;
pub const AXIS_FONT_SIZE: f64 = 18.0;
pub const LABEL_FONT_SIZE: f64 = 14.0;

pub const CURVE_WIDTH: u32 = 3;
pub const MARKER_RADIUS: u32 = 7;

/// Dash and gap length of guide lines, as a fraction of the axis span.
pub const DASH_FRACTION: f64 = 0.015;

/// Head room added above and below the sampled y range.
pub const Y_PADDING_FRACTION: f64 = 0.08;
