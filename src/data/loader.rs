use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ReportError, Result};

use super::model::{ResultFile, SeriesKey, SeriesTable};

// ---------------------------------------------------------------------------
// Result file reader
// ---------------------------------------------------------------------------

/// Read a simulation result file.
///
/// Layout: whitespace-separated columns, one row per temperature sample.
/// * column 0 – temperature
/// * column 1 – entropy
/// * further columns are ignored
/// * blank lines and lines starting with `#` are skipped
///   (the simulation writes a `#Temperature Entropy` header)
pub fn read_result_file(path: &Path) -> Result<ResultFile> {
    let text = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;

    let mut temperature = Vec::new();
    let mut entropy = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut cols = line.split_whitespace();
        let (Some(t), Some(s)) = (cols.next(), cols.next()) else {
            return Err(ReportError::MissingColumn {
                path: path.to_path_buf(),
                line: line_no,
            });
        };

        temperature.push(parse_float(t, path, line_no)?);
        entropy.push(parse_float(s, path, line_no)?);
    }

    if temperature.is_empty() {
        return Err(ReportError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(ResultFile {
        temperature,
        entropy,
    })
}

fn parse_float(tok: &str, path: &Path, line: usize) -> Result<f64> {
    tok.parse::<f64>().map_err(|_| ReportError::Parse {
        path: path.to_path_buf(),
        line,
        token: tok.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Result file writer
// ---------------------------------------------------------------------------

/// Write `(temperature, entropy)` rows in the simulation's format.
///
/// Floats use Rust's shortest round-trip representation, so
/// [`read_result_file`] recovers the exact values. Columns of different
/// lengths are rejected before anything is written.
pub fn write_result_file(path: &Path, temperature: &[f64], entropy: &[f64]) -> Result<()> {
    if temperature.len() != entropy.len() {
        return Err(ReportError::AxisMismatch {
            path: path.to_path_buf(),
            expected: temperature.len(),
            found: entropy.len(),
        });
    }

    let mut out = String::from("#Temperature Entropy\n");
    for (t, s) in temperature.iter().zip(entropy) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{t:<12} {s}");
    }
    std::fs::write(path, out).map_err(|e| ReportError::io(path, e))
}

// ---------------------------------------------------------------------------
// SeriesTable ingestion
// ---------------------------------------------------------------------------

/// Load every key in `keys` from `data_dir`.
///
/// `reference` supplies the shared temperature axis; every other file
/// contributes only its entropy column and must have the same row count.
/// Temperatures that disagree with the reference are logged, not rejected.
pub fn load_table(
    data_dir: &Path,
    dim: u8,
    reference: SeriesKey,
    keys: &[SeriesKey],
) -> Result<SeriesTable> {
    let ref_path = data_dir.join(reference.file_name(dim));
    let ref_file = read_result_file(&ref_path)?;
    log::debug!("{}: {} temperature samples", ref_path.display(), ref_file.len());

    let mut table = SeriesTable::from_reference(reference, ref_file);

    for key in keys.iter().filter(|k| **k != reference) {
        let path = data_dir.join(key.file_name(dim));
        let file = read_result_file(&path)?;

        if file.len() != table.samples() {
            return Err(ReportError::AxisMismatch {
                path,
                expected: table.samples(),
                found: file.len(),
            });
        }

        let drift = file
            .temperature
            .iter()
            .zip(table.temperature())
            .position(|(a, b)| (a - b).abs() > 1e-9 * b.abs().max(1.0));
        if let Some(row) = drift {
            log::warn!(
                "{}: temperature {} differs from reference {} at row {row}",
                path.display(),
                file.temperature[row],
                table.temperature()[row]
            );
        }

        log::debug!("{}: loaded {} rows for {key}", path.display(), file.len());
        table.insert(*key, file.entropy);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Model, Variant};

    fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn reads_columns_and_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "a.txt",
            "#Temperature Entropy\n0.2   0.05\n\n0.4\t0.10 99\n   0.6 0.20\n",
        );
        let file = read_result_file(&path).unwrap();
        assert_eq!(file.temperature, vec![0.2, 0.4, 0.6]);
        assert_eq!(file.entropy, vec![0.05, 0.10, 0.20]);
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "empty.txt", "#Temperature Entropy\n");
        let err = read_result_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::EmptyFile { .. }));
    }

    #[test]
    fn single_column_row_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "short.txt", "0.1 0.2\n0.3\n");
        match read_result_file(&path).unwrap_err() {
            ReportError::MissingColumn { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_token_reports_line_and_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.txt", "# header\n0.1 0.2\n0.3 abc\n");
        match read_result_file(&path).unwrap_err() {
            ReportError::Parse { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_result_file(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }

    #[test]
    fn written_values_reload_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.txt");
        let t = vec![0.2, 0.4, 1.0 / 3.0, 17.8];
        let s = vec![0.693_147_180_559_945_3, -1e-12, 2.5e-300, 3.912_023_005_428_146];
        write_result_file(&path, &t, &s).unwrap();

        let file = read_result_file(&path).unwrap();
        assert_eq!(file.temperature, t);
        assert_eq!(file.entropy, s);
    }

    #[test]
    fn writer_rejects_unequal_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.txt");
        match write_result_file(&path, &[0.2, 0.4, 0.6], &[0.1, 0.2]).unwrap_err() {
            ReportError::AxisMismatch { expected, found, .. } => {
                assert_eq!((expected, found), (3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn table_uses_reference_temperature() {
        let dir = tempfile::tempdir().unwrap();
        let clean = SeriesKey::new(Model::Ising, Variant::Clean);
        let disorder = SeriesKey::new(Model::Ising, Variant::Disorder);
        write(dir.path(), "2D_ising_clean.txt", "0 0.1\n1 0.4\n2 0.9\n");
        write(dir.path(), "2D_ising_disorder.txt", "0 0.05\n1 0.3\n2 0.7\n");

        let table = load_table(dir.path(), 2, clean, &[clean, disorder]).unwrap();
        assert_eq!(table.temperature(), &[0.0, 1.0, 2.0]);
        assert_eq!(table.entropy(&clean).unwrap(), &[0.1, 0.4, 0.9]);
        assert_eq!(table.entropy(&disorder).unwrap(), &[0.05, 0.3, 0.7]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn unequal_row_counts_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let clean = SeriesKey::new(Model::Xy, Variant::Clean);
        let disorder = SeriesKey::new(Model::Xy, Variant::Disorder);
        write(dir.path(), "2D_xy_clean.txt", "0 3.0\n1 3.5\n2 3.9\n");
        write(dir.path(), "2D_xy_disorder.txt", "0 2.9\n1 3.4\n");

        match load_table(dir.path(), 2, clean, &[clean, disorder]).unwrap_err() {
            ReportError::AxisMismatch {
                expected, found, ..
            } => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn differing_temperatures_with_equal_length_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let clean = SeriesKey::clock(Variant::Clean, 2);
        let disorder = SeriesKey::clock(Variant::Disorder, 2);
        write(dir.path(), "2D_clock_clean_q=2.txt", "0.2 0.1\n0.4 0.2\n");
        write(dir.path(), "2D_clock_disorder_q=2.txt", "0.3 0.1\n0.5 0.2\n");

        let table = load_table(dir.path(), 2, clean, &[clean, disorder]).unwrap();
        assert_eq!(table.temperature(), &[0.2, 0.4]);
        assert_eq!(table.entropy(&disorder).unwrap(), &[0.1, 0.2]);
    }
}
