//! The report pipeline: relocate → load → build figure → save.

use crate::config::{ReportConfig, RESULT_EXTENSION};
use crate::data::loader::load_table;
use crate::data::model::SeriesTable;
use crate::data::relocate::relocate_results;
use crate::error::Result;
use crate::figure::{Figure, FigureSpec, OutputMode};
use crate::render::save_figure;

/// Relocate fresh result files, load every series `spec` references and
/// resolve the figure. Nothing is rendered.
pub fn prepare(config: &ReportConfig, spec: &FigureSpec) -> Result<Figure> {
    let moved = relocate_results(&config.root, &config.data_dir, RESULT_EXTENSION)?;
    log::info!(
        "{} result file(s) moved into {}",
        moved.len(),
        config.data_dir.display()
    );

    let keys = spec.series_keys();
    let Some(&reference) = keys.first() else {
        return Figure::build(spec, &SeriesTable::empty());
    };

    let table = load_table(&config.data_dir, config.dimension, reference, &keys)?;
    log::info!(
        "Loaded {} series with {} temperature samples",
        table.len(),
        table.samples()
    );
    for key in table.keys() {
        log::debug!("  {key}");
    }

    Figure::build(spec, &table)
}

/// [`prepare`], then save the figure when the spec asks for a file.
///
/// With [`OutputMode::Interactive`] the figure is returned for the caller
/// to show.
pub fn run(config: &ReportConfig, spec: &FigureSpec) -> Result<Figure> {
    let figure = prepare(config, spec)?;
    if let OutputMode::File(path) = &spec.output {
        save_figure(&figure, path)?;
    }
    Ok(figure)
}
