use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

/// Hue of the first curve in every panel; the rest are spaced evenly
/// around the wheel from here.
const BASE_HUE: f32 = 210.0;

// ---------------------------------------------------------------------------
// Backend-neutral colour
// ---------------------------------------------------------------------------

/// An 8-bit sRGB colour usable by both the window and the file renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl SeriesColor {
    pub fn from_rgb((r, g, b): (u8, u8, u8)) -> Self {
        SeriesColor { r, g, b }
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn to_plotters(self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<SeriesColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            SeriesColor {
                r: (rgb.red * 255.0) as u8,
                g: (rgb.green * 255.0) as u8,
                b: (rgb.blue * 255.0) as u8,
            }
        })
        .collect()
}
