//! Entropy from a sampled energy curve, as the simulation computes it
//! before writing its result files.
//!
//! Thermodynamic integration from the high-temperature limit:
//!
//! $$S(T_i) = \ln n + \frac{E(T_i)}{T_i} - \int_{T_i}^{T_{max}} \frac{E(T)}{T^2}\,dT$$
//!
//! where `n` is the number of single-spin states. The integral uses the
//! trapezoid rule over the sampled grid.

use super::model::{Model, SeriesKey};

/// Spin states used for the XY model, whose continuous angle the
/// simulation discretizes.
pub const XY_SPIN_STATES: u32 = 50;

/// Number of single-spin states entering the `ln n` term.
pub fn spin_states(key: &SeriesKey) -> u32 {
    match key.model {
        Model::Ising => 2,
        Model::Clock => key.q.unwrap_or(2),
        Model::Xy => XY_SPIN_STATES,
    }
}

/// Trapezoid integral of `y(x)` from `x[idx]` to the last sample.
pub fn trapezoid(x: &[f64], y: &[f64], idx: usize) -> f64 {
    let n = x.len().min(y.len());
    let mut sum = 0.0;
    for i in idx..n.saturating_sub(1) {
        sum += (x[i + 1] - x[i]) * (y[i] + y[i + 1]);
    }
    0.5 * sum
}

/// Entropy at every temperature but the last.
///
/// The last sample is only the upper integration limit, matching the
/// `N - 1` rows the simulation writes.
pub fn entropy_from_energy(temperature: &[f64], energy: &[f64], n_states: u32) -> Vec<f64> {
    let n = temperature.len().min(energy.len());
    let integrand: Vec<f64> = (0..n)
        .map(|i| energy[i] / (temperature[i] * temperature[i]))
        .collect();
    let ln_n = f64::from(n_states).ln();

    (0..n.saturating_sub(1))
        .map(|i| ln_n + energy[i] / temperature[i] - trapezoid(&temperature[..n], &integrand, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Variant;

    #[test]
    fn trapezoid_is_exact_for_linear_functions() {
        let x: Vec<f64> = (0..11).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        // ∫_0^1 (2x + 1) dx = 2
        assert!((trapezoid(&x, &y, 0) - 2.0).abs() < 1e-12);
        // ∫_0.5^1 (2x + 1) dx = 1.25
        assert!((trapezoid(&x, &y, 5) - 1.25).abs() < 1e-12);
        assert_eq!(trapezoid(&x, &y, 10), 0.0);
    }

    #[test]
    fn zero_energy_gives_ln_n_everywhere() {
        let t: Vec<f64> = (1..=5).map(|k| 0.2 * k as f64).collect();
        let e = vec![0.0; t.len()];
        let s = entropy_from_energy(&t, &e, 20);
        assert_eq!(s.len(), 4);
        for v in s {
            assert!((v - 20f64.ln()).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_energy_matches_closed_form() {
        // E = -c: S(T) = ln n - c/T - c (1/T_max - 1/T) up to trapezoid error
        let t: Vec<f64> = (1..=2000).map(|k| 0.01 * k as f64).collect();
        let c = 1.5;
        let e = vec![-c; t.len()];
        let s = entropy_from_energy(&t, &e, 2);
        let t_max = *t.last().unwrap();
        let i = 999; // T = 10
        let expected = 2f64.ln() - c / t[i] - c * (1.0 / t_max - 1.0 / t[i]);
        assert!((s[i] - expected).abs() < 1e-4, "{} vs {expected}", s[i]);
    }

    #[test]
    fn spin_states_follow_model() {
        assert_eq!(spin_states(&SeriesKey::new(Model::Ising, Variant::Clean)), 2);
        assert_eq!(spin_states(&SeriesKey::clock(Variant::Disorder, 20)), 20);
        assert_eq!(spin_states(&SeriesKey::new(Model::Xy, Variant::Clean)), 50);
    }
}
