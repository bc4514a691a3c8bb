//! Static figure output through `plotters`.
//!
//! Every figure is drawn to SVG first. `.svg` targets get that text as is,
//! `.pdf` targets get it converted with `svg2pdf`. Text is laid out with
//! plotters' built-in size estimate, so no font libraries are linked.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use svg2pdf::usvg;

use crate::color::{generate_palette, SeriesColor};
use crate::config::FigureStyle;
use crate::error::{ReportError, Result};
use crate::figure::{AxisRange, Figure, LegendPosition, Panel};

const FONT_FAMILY: &str = "sans-serif";
const LINE_WIDTH: u32 = 2;

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ReportError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Render(err.to_string())
    }
}

// =================================================================================================
// Public API
// =================================================================================================

/// Render `figure` to `path`, overwriting any existing file.
///
/// The format follows the extension: `.pdf` or `.svg`.
pub fn save_figure(figure: &Figure, path: &Path) -> Result<()> {
    let size = figure.style.pixel_size();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let bytes = match ext.as_str() {
        "svg" => render_svg(figure)?.into_bytes(),
        "pdf" => svg_to_pdf(&render_svg(figure)?, &figure.style)?,
        _ => {
            return Err(ReportError::Render(format!(
                "unsupported output format '.{ext}' for {}, expected .pdf or .svg",
                path.display()
            )))
        }
    };
    std::fs::write(path, bytes).map_err(|e| ReportError::io(path, e))?;

    log::info!(
        "Saved {} panel(s) to {} ({}x{} px)",
        figure.panels.len(),
        path.display(),
        size.0,
        size.1
    );
    Ok(())
}

/// Draw `figure` into an SVG document.
pub fn render_svg(figure: &Figure) -> Result<String> {
    let mut svg = String::new();
    draw_figure(SVGBackend::with_string(&mut svg, figure.style.pixel_size()), figure)?;
    Ok(svg)
}

/// Convert an SVG document to a single-page PDF.
///
/// The page keeps the figure's physical size: pixels map to points through
/// the style's DPI.
fn svg_to_pdf(svg: &str, style: &FigureStyle) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| ReportError::Render(format!("parsing rendered svg: {e}")))?;

    let mut page = svg2pdf::PageOptions::default();
    page.dpi = style.dpi as f32;

    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), page)
        .map_err(|e| ReportError::Render(format!("converting to pdf: {e}")))
}

/// Clip the polyline `points` to the rectangle spanned by `x` and `y`.
///
/// Each segment is cut where it crosses the boundary, so a curve running
/// along an axis limit stays drawn. Returns the visible runs, each with at
/// least two points. Segments with non-finite ends are dropped.
pub fn visible_segments(
    points: &[(f64, f64)],
    x: AxisRange,
    y: AxisRange,
) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], x, y) {
            Some((start, end)) if current.last() == Some(&start) => current.push(end),
            Some((start, end)) => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current = vec![start, end];
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Liang-Barsky clipping of the segment `a`-`b`.
///
/// Ends that need no clipping are returned unchanged, bit for bit, so
/// consecutive segments can be joined by comparing points.
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    x: AxisRange,
    y: AxisRange,
) -> Option<((f64, f64), (f64, f64))> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, a.0 - x.min),
        (dx, x.max - a.0),
        (-dy, a.1 - y.min),
        (dy, y.max - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    // Rounding may leave an interpolated point a hair outside the range.
    let at = |t: f64| {
        (
            (a.0 + t * dx).max(x.min).min(x.max),
            (a.1 + t * dy).max(y.min).min(y.max),
        )
    };
    let start = if t0 == 0.0 { a } else { at(t0) };
    let end = if t1 == 1.0 { b } else { at(t1) };
    Some((start, end))
}

// =================================================================================================
// Drawing
// =================================================================================================

fn draw_figure<DB: DrawingBackend>(backend: DB, figure: &Figure) -> Result<()> {
    let style = &figure.style;
    let background = SeriesColor::from_rgb(style.background).to_plotters();
    let edge = SeriesColor::from_rgb(style.edge).to_plotters();

    let root = backend.into_drawing_area();
    root.fill(&background)?;

    let (w, h) = root.dim_in_pixel();
    root.draw(&Rectangle::new(
        [(0, 0), (w as i32 - 1, h as i32 - 1)],
        edge.stroke_width(1),
    ))?;

    let cells = root.split_evenly((figure.grid.rows, figure.grid.cols));
    for (area, panel) in cells.iter().zip(&figure.panels) {
        draw_panel(area, panel, figure, background, edge)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    figure: &Figure,
    background: RGBColor,
    edge: RGBColor,
) -> Result<()> {
    let font_px = figure.style.font_px(figure.style.font_size);
    let title_px = font_px * 1.2;

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT_FAMILY, title_px))
        .margin(font_px.round() as u32)
        .x_label_area_size((font_px * 3.5).round() as u32)
        .y_label_area_size((font_px * 4.5).round() as u32)
        .build_cartesian_2d(panel.x_range.as_range(), panel.y_range.as_range())?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style((FONT_FAMILY, font_px))
        .axis_desc_style((FONT_FAMILY, font_px))
        .x_label_formatter(&|x| format!("{x:.1}"))
        .y_label_formatter(&|y| format!("{y:.2}"))
        .draw()?;

    let palette = generate_palette(panel.curves.len());
    for (curve, color) in panel.curves.iter().zip(palette) {
        let color = color.to_plotters();
        let mut segments = visible_segments(&curve.points, panel.x_range, panel.y_range).into_iter();

        // The legend entry rides on the first run, even when it is empty.
        let first = segments.next().unwrap_or_default();
        chart
            .draw_series(LineSeries::new(first, color.stroke_width(LINE_WIDTH)))?
            .label(curve.label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });

        for segment in segments {
            chart.draw_series(LineSeries::new(segment, color.stroke_width(LINE_WIDTH)))?;
        }
    }

    chart
        .configure_series_labels()
        .position(legend_position(panel.legend))
        .label_font((FONT_FAMILY, font_px))
        .background_style(background.mix(0.8))
        .border_style(edge)
        .draw()?;

    Ok(())
}

fn legend_position(pos: LegendPosition) -> SeriesLabelPosition {
    match pos {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

// =================================================================================================
// Tests
// =================================================================================================
