//! Declarative figure description and its resolution against loaded data.
//!
//! A [`FigureSpec`] is static configuration: which series go in which panel,
//! fixed axis ranges, titles and labels. [`Figure::build`] combines it with a
//! [`SeriesTable`] into a [`Figure`] that owns every curve it draws. Each
//! series carries its own legend label from the moment it is declared.

use std::collections::BTreeSet;
use std::ops::Range;
use std::path::PathBuf;

use crate::config::FigureStyle;
use crate::data::model::{Model, SeriesKey, SeriesTable, Variant};
use crate::error::{ReportError, Result};

/// Strength of the random bond disorder used by the simulation.
pub const DISORDER_STRENGTH: f64 = 5.0;

pub const TEMPERATURE_LABEL: &str = "T [J / k_B]";
pub const ENTROPY_LABEL: &str = "S [k_B]";

// ---------------------------------------------------------------------------
// Spec types
// ---------------------------------------------------------------------------

/// Closed axis interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        AxisRange { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn as_range(&self) -> Range<f64> {
        self.min..self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    #[default]
    LowerRight,
}

/// One curve to draw, with the label it shows in the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub key: SeriesKey,
    pub label: String,
}

impl SeriesSpec {
    pub fn new(key: SeriesKey, label: impl Into<String>) -> Self {
        SeriesSpec {
            key,
            label: label.into(),
        }
    }
}

/// One subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub legend: LegendPosition,
    pub series: Vec<SeriesSpec>,
}

impl PanelSpec {
    /// Entropy vs. temperature panel with the standard axis labels.
    pub fn entropy(title: impl Into<String>, x_range: AxisRange, y_range: AxisRange) -> Self {
        PanelSpec {
            title: title.into(),
            x_label: TEMPERATURE_LABEL.to_string(),
            y_label: ENTROPY_LABEL.to_string(),
            x_range,
            y_range,
            legend: LegendPosition::default(),
            series: Vec::new(),
        }
    }

    pub fn with_series(mut self, key: SeriesKey, label: impl Into<String>) -> Self {
        self.series.push(SeriesSpec::new(key, label));
        self
    }

    /// Clean vs. disorder overlay, the comparison every preset panel shows.
    fn clean_vs_disorder(
        title: &str,
        clean: SeriesKey,
        disorder: SeriesKey,
        y_range: AxisRange,
    ) -> Self {
        PanelSpec::entropy(title, AxisRange::new(0.0, 5.0), y_range)
            .with_series(clean, "Clean system")
            .with_series(
                disorder,
                format!("Disorder system with Δ = {DISORDER_STRENGTH}"),
            )
    }
}

/// Where the rendered figure goes.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMode {
    /// Shown in a window.
    Interactive,
    /// Saved to this path; `.pdf` or `.svg`.
    File(PathBuf),
}

/// Panel grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

/// Complete figure configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSpec {
    pub grid: GridLayout,
    pub panels: Vec<PanelSpec>,
    pub style: FigureStyle,
    pub output: OutputMode,
}

impl FigureSpec {
    /// Ising clean vs. disorder in one interactive panel.
    pub fn ising_single() -> Self {
        FigureSpec {
            grid: GridLayout { rows: 1, cols: 1 },
            panels: vec![PanelSpec::clean_vs_disorder(
                "Entropy of 2D Ising system",
                SeriesKey::new(Model::Ising, Variant::Clean),
                SeriesKey::new(Model::Ising, Variant::Disorder),
                AxisRange::new(0.0, 1.0),
            )],
            style: FigureStyle::default(),
            output: OutputMode::Interactive,
        }
    }

    /// Ising, 2-state clock, 20-state clock and XY in a 2x2 grid, saved to
    /// `output`.
    pub fn four_panel(output: impl Into<PathBuf>) -> Self {
        FigureSpec {
            grid: GridLayout { rows: 2, cols: 2 },
            panels: vec![
                PanelSpec::clean_vs_disorder(
                    "Entropy of 2D Ising system",
                    SeriesKey::new(Model::Ising, Variant::Clean),
                    SeriesKey::new(Model::Ising, Variant::Disorder),
                    AxisRange::new(0.0, 1.0),
                ),
                PanelSpec::clean_vs_disorder(
                    "Entropy of 2D 2-state clock system",
                    SeriesKey::clock(Variant::Clean, 2),
                    SeriesKey::clock(Variant::Disorder, 2),
                    AxisRange::new(0.0, 1.0),
                ),
                PanelSpec::clean_vs_disorder(
                    "Entropy of 2D 20-state clock system",
                    SeriesKey::clock(Variant::Clean, 20),
                    SeriesKey::clock(Variant::Disorder, 20),
                    AxisRange::new(1.5, 3.0),
                ),
                PanelSpec::clean_vs_disorder(
                    "Entropy of 2D XY system",
                    SeriesKey::new(Model::Xy, Variant::Clean),
                    SeriesKey::new(Model::Xy, Variant::Disorder),
                    AxisRange::new(2.5, 5.0),
                ),
            ],
            style: FigureStyle::default(),
            output: OutputMode::File(output.into()),
        }
    }

    /// Every key the panels reference, in first-use order, without repeats.
    /// The first one is the natural temperature reference.
    pub fn series_keys(&self) -> Vec<SeriesKey> {
        let mut seen = BTreeSet::new();
        self.panels
            .iter()
            .flat_map(|p| p.series.iter().map(|s| s.key))
            .filter(|k| seen.insert(*k))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Resolved figure
// ---------------------------------------------------------------------------

/// A labelled line: `(temperature, entropy)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub key: SeriesKey,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// A resolved subplot owning its curves.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub legend: LegendPosition,
    pub curves: Vec<Curve>,
}

impl Panel {
    pub fn legend_labels(&self) -> Vec<&str> {
        self.curves.iter().map(|c| c.label.as_str()).collect()
    }
}

/// The figure a renderer draws. Panels are in row-major grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub grid: GridLayout,
    pub style: FigureStyle,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Attach data from `table` to every series in `spec`.
    pub fn build(spec: &FigureSpec, table: &SeriesTable) -> Result<Figure> {
        if spec.panels.len() > spec.grid.cells() {
            return Err(ReportError::LayoutOverflow {
                panels: spec.panels.len(),
                cells: spec.grid.cells(),
            });
        }

        let temperature = table.temperature();
        let mut panels = Vec::with_capacity(spec.panels.len());

        for panel in &spec.panels {
            let mut curves = Vec::with_capacity(panel.series.len());
            for series in &panel.series {
                let entropy = table
                    .entropy(&series.key)
                    .ok_or(ReportError::MissingSeries { key: series.key })?;
                curves.push(Curve {
                    key: series.key,
                    label: series.label.clone(),
                    points: temperature.iter().copied().zip(entropy.iter().copied()).collect(),
                });
            }

            panels.push(Panel {
                title: panel.title.clone(),
                x_label: panel.x_label.clone(),
                y_label: panel.y_label.clone(),
                x_range: panel.x_range,
                y_range: panel.y_range,
                legend: panel.legend,
                curves,
            });
        }

        Ok(Figure {
            grid: spec.grid,
            style: spec.style,
            panels,
        })
    }
}
