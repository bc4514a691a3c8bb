//! Compile-time report settings: where result files live and how the
//! figure looks. There is no configuration file; binaries use the defaults.

use std::path::{Path, PathBuf};

/// Dimensionality of the simulated lattices.
pub const DIMENSION: u8 = 2;

/// Extension of the simulation's result files.
pub const RESULT_EXTENSION: &str = "txt";

/// Filesystem locations for one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Directory the simulation writes its `.txt` files into.
    pub root: PathBuf,
    /// `<root>/plot/data`, where result files are moved and read from.
    pub data_dir: PathBuf,
    /// `<root>/plot/test_plots.pdf`, the saved figure.
    pub output: PathBuf,
    pub dimension: u8,
}

impl ReportConfig {
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let plot_dir = root.join("plot");
        ReportConfig {
            data_dir: plot_dir.join("data"),
            output: plot_dir.join("test_plots.pdf"),
            root,
            dimension: DIMENSION,
        }
    }
}

impl Default for ReportConfig {
    /// Rooted at the parent of the working directory, where the simulation
    /// binary leaves its output.
    fn default() -> Self {
        Self::with_root("..")
    }
}

/// Figure-wide appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    /// Width and height in inches.
    pub size_inches: (f64, f64),
    pub dpi: u32,
    /// Base font size in points.
    pub font_size: f64,
    pub background: (u8, u8, u8),
    pub edge: (u8, u8, u8),
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            size_inches: (20.0, 16.0),
            dpi: 80,
            font_size: 12.0,
            background: (255, 255, 255),
            edge: (0, 0, 0),
        }
    }
}

impl FigureStyle {
    /// Pixel dimensions of the saved image.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.size_inches.0 * f64::from(self.dpi)).round() as u32,
            (self.size_inches.1 * f64::from(self.dpi)).round() as u32,
        )
    }

    /// A point size converted to pixels at this DPI.
    pub fn font_px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}
