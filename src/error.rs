use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::SeriesKey;

/// Everything that can go wrong between relocating result files and
/// writing the finished figure.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: '{token}' is not a number")]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path}:{line}: expected at least two columns (temperature, entropy)")]
    MissingColumn { path: PathBuf, line: usize },

    #[error("{path} contains no data rows")]
    EmptyFile { path: PathBuf },

    #[error("{path} has {found} rows but the temperature axis has {expected}")]
    AxisMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("series {key} was not loaded")]
    MissingSeries { key: SeriesKey },

    #[error("{panels} panels do not fit into a grid of {cells} cells")]
    LayoutOverflow { panels: usize, cells: usize },

    #[error("rendering failed: {0}")]
    Render(String),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
