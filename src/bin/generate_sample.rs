//! Write a synthetic set of result files in the simulation's format so the
//! report can be rendered without running the Monte Carlo code.
//!
//! Usage: `generate_sample [DIR]` (default `..`, where the simulation
//! leaves its output).

use std::path::PathBuf;

use anyhow::{Context, Result};

use spin_entropy_plot::config::DIMENSION;
use spin_entropy_plot::data::loader::write_result_file;
use spin_entropy_plot::data::model::{Model, SeriesKey, Variant};
use spin_entropy_plot::data::thermo::{entropy_from_energy, spin_states};
use spin_entropy_plot::figure::{FigureSpec, DISORDER_STRENGTH};

/// Temperature grid of the simulation: `T_k = 0.2 k`, `k = 1..=100`.
const N_TEMPERATURES: usize = 100;
const DT: f64 = 0.2;

/// Mean energy per spin, a smooth stand-in for the Monte Carlo average.
fn mean_energy(key: &SeriesKey, t: f64) -> f64 {
    let (depth, scale) = match (key.model, key.q) {
        (Model::Ising, _) | (Model::Clock, Some(2)) => (2.0, 1.0),
        (Model::Clock, _) => (2.0, 0.6),
        (Model::Xy, _) => (2.0, 0.7),
    };
    match key.variant {
        Variant::Clean => -depth * (scale / t).tanh(),
        // Random bonds of strength Δ lower the ground state and smear the
        // crossover.
        Variant::Disorder => {
            let depth = depth * (1.0 + 0.05 * DISORDER_STRENGTH);
            -depth * (0.8 * scale / t).tanh()
        }
    }
}

/// Seeded Gaussian noise for the synthetic energies (SplitMix64 + Box-Muller).
struct Noise(u64);

impl Noise {
    fn uniform(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
    }

    fn gauss(&mut self, std_dev: f64) -> f64 {
        let u1 = self.uniform().max(1e-15);
        let u2 = self.uniform();
        std_dev * (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut noise = Noise(42);
    let temperature: Vec<f64> = (1..=N_TEMPERATURES).map(|k| DT * k as f64).collect();

    // The files the four-panel report reads.
    let keys = FigureSpec::four_panel("unused.svg").series_keys();

    for key in &keys {
        let energy: Vec<f64> = temperature
            .iter()
            .map(|&t| mean_energy(key, t) + noise.gauss(0.002))
            .collect();
        let entropy = entropy_from_energy(&temperature, &energy, spin_states(key));

        let path = out_dir.join(key.file_name(DIMENSION));
        write_result_file(&path, &temperature[..entropy.len()], &entropy)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {} ({} rows)", path.display(), entropy.len());
    }

    println!(
        "Wrote {} result files ({} temperatures each) to {}",
        keys.len(),
        N_TEMPERATURES - 1,
        out_dir.display()
    );
    Ok(())
}
