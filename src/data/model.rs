use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Model / Variant – what the simulation ran
// ---------------------------------------------------------------------------

/// Spin model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Model {
    Ising,
    Clock,
    Xy,
}

impl Model {
    /// Lower-case token used in result file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Model::Ising => "ising",
            Model::Clock => "clock",
            Model::Xy => "xy",
        }
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ising" => Ok(Model::Ising),
            "clock" => Ok(Model::Clock),
            "xy" => Ok(Model::Xy),
            other => Err(format!("unknown model '{other}'")),
        }
    }
}

/// Clean lattice or lattice with random bond disorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Clean,
    Disorder,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Clean => "clean",
            Variant::Disorder => "disorder",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clean" => Ok(Variant::Clean),
            "disorder" => Ok(Variant::Disorder),
            other => Err(format!("unknown variant '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// SeriesKey – identifies one entropy curve
// ---------------------------------------------------------------------------

/// One loaded entropy curve: `(model, variant, Q)`.
///
/// `q` is the number of clock states and is only meaningful for
/// [`Model::Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesKey {
    pub model: Model,
    pub variant: Variant,
    pub q: Option<u32>,
}

impl SeriesKey {
    pub const fn new(model: Model, variant: Variant) -> Self {
        SeriesKey {
            model,
            variant,
            q: None,
        }
    }

    pub const fn clock(variant: Variant, q: u32) -> Self {
        SeriesKey {
            model: Model::Clock,
            variant,
            q: Some(q),
        }
    }

    /// Result file name written by the simulation, e.g.
    /// `2D_clock_disorder_q=20.txt`.
    pub fn file_name(&self, dim: u8) -> String {
        match self.q {
            Some(q) => format!(
                "{dim}D_{}_{}_q={q}.txt",
                self.model.as_str(),
                self.variant.as_str()
            ),
            None => format!("{dim}D_{}_{}.txt", self.model.as_str(), self.variant.as_str()),
        }
    }

    /// Inverse of [`SeriesKey::file_name`]: returns the dimensionality and key.
    pub fn parse_file_name(name: &str) -> Option<(u8, SeriesKey)> {
        let stem = name.strip_suffix(".txt")?;
        let mut parts = stem.split('_');

        let dim = parts.next()?.strip_suffix('D')?.parse::<u8>().ok()?;
        let model = parts.next()?.parse::<Model>().ok()?;
        let variant = parts.next()?.parse::<Variant>().ok()?;
        let q = match parts.next() {
            Some(tok) => Some(tok.strip_prefix("q=")?.parse::<u32>().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }

        Some((dim, SeriesKey { model, variant, q }))
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.model.as_str(), self.variant.as_str())?;
        if let Some(q) = self.q {
            write!(f, "/q={q}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ResultFile – one parsed simulation output file
// ---------------------------------------------------------------------------

/// Columns 0 and 1 of a result file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultFile {
    pub temperature: Vec<f64>,
    pub entropy: Vec<f64>,
}

impl ResultFile {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SeriesTable – all curves on the shared temperature axis
// ---------------------------------------------------------------------------

/// Entropy curves keyed by [`SeriesKey`], co-indexed with one shared
/// temperature sequence.
#[derive(Debug, Clone)]
pub struct SeriesTable {
    temperature: Vec<f64>,
    series: BTreeMap<SeriesKey, Vec<f64>>,
}

impl SeriesTable {
    /// A table with no temperature samples and no series.
    pub fn empty() -> Self {
        SeriesTable {
            temperature: Vec::new(),
            series: BTreeMap::new(),
        }
    }

    /// Start a table from the reference file, which owns the temperature axis.
    pub(crate) fn from_reference(key: SeriesKey, reference: ResultFile) -> Self {
        let mut series = BTreeMap::new();
        series.insert(key, reference.entropy);
        SeriesTable {
            temperature: reference.temperature,
            series,
        }
    }

    /// Insert an entropy column. The caller has checked its length.
    pub(crate) fn insert(&mut self, key: SeriesKey, entropy: Vec<f64>) {
        debug_assert_eq!(entropy.len(), self.temperature.len());
        self.series.insert(key, entropy);
    }

    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    pub fn entropy(&self, key: &SeriesKey) -> Option<&[f64]> {
        self.series.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SeriesKey> {
        self.series.keys()
    }

    /// Number of temperature samples.
    pub fn samples(&self) -> usize {
        self.temperature.len()
    }

    /// Number of loaded series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_match_simulation_output() {
        assert_eq!(
            SeriesKey::new(Model::Ising, Variant::Clean).file_name(2),
            "2D_ising_clean.txt"
        );
        assert_eq!(
            SeriesKey::new(Model::Xy, Variant::Disorder).file_name(2),
            "2D_xy_disorder.txt"
        );
        assert_eq!(
            SeriesKey::clock(Variant::Disorder, 20).file_name(2),
            "2D_clock_disorder_q=20.txt"
        );
    }

    #[test]
    fn parse_file_name_inverts_file_name() {
        let key = SeriesKey::clock(Variant::Clean, 2);
        assert_eq!(
            SeriesKey::parse_file_name("2D_clock_clean_q=2.txt"),
            Some((2, key))
        );
        assert_eq!(
            SeriesKey::parse_file_name("3D_ising_disorder.txt"),
            Some((3, SeriesKey::new(Model::Ising, Variant::Disorder)))
        );
    }

    #[test]
    fn parse_file_name_rejects_foreign_files() {
        assert_eq!(SeriesKey::parse_file_name("notes.txt"), None);
        assert_eq!(SeriesKey::parse_file_name("2D_ising_clean.dat"), None);
        assert_eq!(SeriesKey::parse_file_name("2D_potts_clean.txt"), None);
        assert_eq!(SeriesKey::parse_file_name("2D_clock_clean_q=x.txt"), None);
        assert_eq!(SeriesKey::parse_file_name("2D_xy_clean_q=2_extra.txt"), None);
    }

    #[test]
    fn display_includes_q_only_for_clock() {
        assert_eq!(SeriesKey::new(Model::Xy, Variant::Clean).to_string(), "xy/clean");
        assert_eq!(
            SeriesKey::clock(Variant::Clean, 20).to_string(),
            "clock/clean/q=20"
        );
    }
}
