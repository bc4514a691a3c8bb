use eframe::egui::Ui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::color::generate_palette;
use crate::figure::{Figure, LegendPosition, Panel};
use crate::render::visible_segments;

/// Smallest height a panel is squeezed to before the window scrolls.
const MIN_PANEL_HEIGHT: f32 = 160.0;

// ---------------------------------------------------------------------------
// Figure grid (central panel)
// ---------------------------------------------------------------------------

/// Lay the figure's panels out row-major over the available space.
pub fn figure_grid(ui: &mut Ui, figure: &Figure) {
    if figure.panels.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No panels to show");
        });
        return;
    }

    let rows = figure.grid.rows.max(1);
    let cols = figure.grid.cols.max(1);
    let gap = ui.spacing().item_spacing.y * (rows - 1) as f32;
    let row_height = ((ui.available_height() - gap) / rows as f32).max(MIN_PANEL_HEIGHT);

    for (r, row) in figure.panels.chunks(cols).enumerate() {
        ui.columns(cols, |columns: &mut [Ui]| {
            for (c, (col_ui, panel)) in columns.iter_mut().zip(row).enumerate() {
                panel_plot(col_ui, r * cols + c, panel, row_height);
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Single panel
// ---------------------------------------------------------------------------

/// Render one panel with its fixed axis bounds and a legend built from
/// each curve's own label.
///
/// Curves are clipped to the panel ranges, so the auto bounds settle on
/// exactly those ranges.
pub fn panel_plot(ui: &mut Ui, index: usize, panel: &Panel, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&panel.title);
    });

    let palette = generate_palette(panel.curves.len());

    Plot::new(("entropy_panel", index))
        .legend(Legend::default().position(legend_corner(panel.legend)))
        .x_axis_label(panel.x_label.as_str())
        .y_axis_label(panel.y_label.as_str())
        .include_x(panel.x_range.min)
        .include_x(panel.x_range.max)
        .include_y(panel.y_range.min)
        .include_y(panel.y_range.max)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (curve, color) in panel.curves.iter().zip(palette) {
                // Runs sharing a name form one legend entry.
                for run in curve_runs(&curve.points, panel) {
                    plot_ui.line(
                        Line::new(PlotPoints::new(run))
                            .name(&curve.label)
                            .color(color.to_color32())
                            .width(1.5),
                    );
                }
            }
        });
}

/// Visible runs of one curve as plot points. A curve with nothing in range
/// yields one empty run so it keeps its legend entry.
fn curve_runs(points: &[(f64, f64)], panel: &Panel) -> Vec<Vec<[f64; 2]>> {
    let runs: Vec<Vec<[f64; 2]>> = visible_segments(points, panel.x_range, panel.y_range)
        .into_iter()
        .map(|run| run.into_iter().map(|(t, s)| [t, s]).collect())
        .collect();
    if runs.is_empty() {
        vec![Vec::new()]
    } else {
        runs
    }
}

fn legend_corner(pos: LegendPosition) -> Corner {
    match pos {
        LegendPosition::UpperLeft => Corner::LeftTop,
        LegendPosition::UpperRight => Corner::RightTop,
        LegendPosition::LowerLeft => Corner::LeftBottom,
        LegendPosition::LowerRight => Corner::RightBottom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::{AxisRange, FigureSpec};

    fn ising_panel() -> Panel {
        let spec = FigureSpec::ising_single().panels.remove(0);
        Panel {
            title: spec.title,
            x_label: spec.x_label,
            y_label: spec.y_label,
            x_range: spec.x_range,
            y_range: spec.y_range,
            legend: spec.legend,
            curves: Vec::new(),
        }
    }

    #[test]
    fn runs_stay_inside_the_fixed_bounds() {
        let panel = ising_panel();
        assert_eq!(panel.x_range, AxisRange::new(0.0, 5.0));
        assert_eq!(panel.y_range, AxisRange::new(0.0, 1.0));

        let points = [(4.0, 0.9), (6.0, 1.3), (7.0, 1.4)];
        let runs = curve_runs(&points, &panel);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[0][0], [4.0, 0.9]);
        assert!((runs[0][1][0] - 4.5).abs() < 1e-9);
        assert!(runs
            .iter()
            .flatten()
            .all(|&[t, s]| panel.x_range.contains(t) && panel.y_range.contains(s)));
    }

    #[test]
    fn out_of_range_curve_keeps_a_legend_entry() {
        let panel = ising_panel();
        assert_eq!(curve_runs(&[(1.0, 2.0), (2.0, 3.0)], &panel), vec![Vec::<[f64; 2]>::new()]);
    }
}
