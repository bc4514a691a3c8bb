/// Data layer: result files, relocation and the series table.
///
/// Architecture:
/// ```text
///  ../*.txt   (simulation output)
///        │
///        ▼
///   ┌──────────┐
///   │ relocate │  move into plot/data/
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse files → SeriesTable
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ SeriesTable │  shared temperature axis, entropy per SeriesKey
///   └─────────────┘
/// ```

pub mod loader;
pub mod model;
pub mod relocate;
pub mod thermo;
