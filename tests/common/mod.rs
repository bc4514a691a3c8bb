//! Common utilities for integration tests

use std::path::{Path, PathBuf};

use spin_entropy_plot::config::DIMENSION;
use spin_entropy_plot::data::loader::write_result_file;
use spin_entropy_plot::data::model::SeriesKey;
use spin_entropy_plot::figure::FigureSpec;

/// Write one result file for `key` into `dir`.
pub fn write_series(dir: &Path, key: SeriesKey, temperature: &[f64], entropy: &[f64]) -> PathBuf {
    let path = dir.join(key.file_name(DIMENSION));
    write_result_file(&path, temperature, entropy).unwrap();
    path
}

/// Write all eight files the four-panel report needs, `n` rows each.
///
/// Entropy values are placed inside each panel's y range so every curve is
/// visible.
pub fn write_full_set(dir: &Path, n: usize) -> Vec<PathBuf> {
    let temperature: Vec<f64> = (1..=n).map(|k| 0.2 * k as f64).collect();
    let spec = FigureSpec::four_panel("unused.svg");

    let mut paths = Vec::new();
    for panel in &spec.panels {
        let span = panel.y_range.max - panel.y_range.min;
        for (offset, series) in panel.series.iter().enumerate() {
            let entropy: Vec<f64> = (0..n)
                .map(|i| {
                    let frac = (i as f64 + 1.0) / (n as f64 + 1.0);
                    panel.y_range.min + span * frac * (0.9 - 0.1 * offset as f64)
                })
                .collect();
            paths.push(write_series(dir, series.key, &temperature, &entropy));
        }
    }
    paths
}
