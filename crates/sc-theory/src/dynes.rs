//! Dynes-broadened BCS density of states and its thermal moments.
//!
//! R. C. Dynes et al., Phys. Rev. Lett. 41, 1509 (1978). Energies are in
//! any common unit (typically Δ(0)); the broadening Γ enters as the
//! imaginary part of the energy, E = ε - iΓ.

use crate::bcs;
use crate::config::Numerics;
use crate::material::MaterialParameters;
use num_complex::Complex64;
use sc_core::special::fermi;
use sc_core::{Evaluation, Status};

/// Energy window above the gap edge, in units of k_B T.
const THERMAL_WINDOW: f64 = 50.0;

/// sqrt(E² - Δ²) on the branch where Re[E / sqrt(E² - Δ²)] ≥ 0.
fn branch_root(energy: Complex64, delta: f64) -> Complex64 {
    let root = (energy * energy - Complex64::new(delta * delta, 0.0)).sqrt();
    if (energy / root).re < 0.0 { -root } else { root }
}

/// N(ε) = Re[E / sqrt(E² - Δ²)], the normalized density of states.
///
/// Non-negative for every real ε. At Γ = 0 it is 0 inside the gap, `+∞`
/// at |ε| = Δ and ε / sqrt(ε² - Δ²) outside.
pub fn density_of_states(energy: f64, gamma: f64, delta: f64) -> f64 {
    let e = Complex64::new(energy, -gamma);
    let root = branch_root(e, delta);
    if root.norm() == 0.0 {
        return f64::INFINITY;
    }
    (e / root).re
}

/// M(ε) = Re[Δ / sqrt(E² - Δ²)], the anomalous (coherence-factor) term.
pub fn coherence_factor(energy: f64, gamma: f64, delta: f64) -> f64 {
    let e = Complex64::new(energy, -gamma);
    let root = branch_root(e, delta);
    if root.norm() == 0.0 {
        return f64::INFINITY;
    }
    (Complex64::new(delta, 0.0) / root).re
}

/// Ratio of the superconducting to normal-state spin-lattice relaxation
/// rate (Hebel-Slichter),
///
/// ```text
/// (2 / k_B T) ∫₀^∞ [N(E) N(E') + M(E) M(E')] f(E) (1 - f(E')) dE,  E' = E + αΔ₀
/// ```
///
/// with the broadening `params.dynes_gamma` Δ₀. `alpha` is the Zeeman
/// splitting in units of Δ₀ and cuts off the coherence-peak divergence.
pub fn hebel_slichter_ratio(
    t: f64,
    params: &MaterialParameters,
    alpha: f64,
    numerics: &Numerics,
) -> Evaluation {
    if t.is_nan() || t < 0.0 {
        return Evaluation::clamped(0.0);
    }
    if t == 0.0 {
        return Evaluation::converged(0.0);
    }

    let gap = bcs::reduced_gap(t, numerics);
    let delta = gap.value;
    let gamma = params.dynes_gamma;
    let tau = params.reduced_thermal_energy(t);

    let integrand = |e: f64| {
        let shifted = e + alpha;
        let normal = density_of_states(e, gamma, delta) * density_of_states(shifted, gamma, delta);
        let anomalous = coherence_factor(e, gamma, delta) * coherence_factor(shifted, gamma, delta);
        (normal + anomalous) * fermi(e / tau) * (1.0 - fermi(shifted / tau))
    };

    let upper = delta + THERMAL_WINDOW * tau;
    match numerics.integrate_split(integrand, 0.0, upper, &[delta - alpha, delta]) {
        Ok(result) => {
            let status = if result.converged {
                gap.status
            } else {
                gap.status.worst(Status::NotConverged)
            };
            Evaluation::new(2.0 * result.value / tau, status)
        }
        Err(err) => {
            tracing::warn!(%err, t, alpha, "Hebel-Slichter integral diverged");
            Evaluation::singular()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharp_gap_is_empty() {
        assert!(density_of_states(0.0, 0.0, 1.0).abs() < 1e-12);
        assert!(density_of_states(0.5, 0.0, 1.0).abs() < 1e-12);
        assert!(coherence_factor(0.5, 0.0, 1.0).abs() < 1e-12);
    }

    #[test]
    fn coherence_peak_above_the_gap() {
        let just_above = density_of_states(1.001, 0.0, 1.0);
        assert!(just_above > 20.0, "{just_above}");
        assert!((just_above - 1.001 / (1.001_f64 * 1.001 - 1.0).sqrt()).abs() < 1e-9);
        assert!(density_of_states(1.0, 0.0, 1.0).is_infinite());
        let far = density_of_states(10.0, 0.0, 1.0);
        assert!((far - 10.0 / 99.0_f64.sqrt()).abs() < 1e-12);
        assert!((coherence_factor(10.0, 0.0, 1.0) - 1.0 / 99.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn broadening_fills_the_gap() {
        let n0 = density_of_states(0.0, 0.1, 1.0);
        assert!(n0 > 0.0);
        assert!((n0 - 0.1 / 1.01_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn density_is_non_negative_and_even() {
        for i in -40..=40 {
            let e = i as f64 * 0.1;
            for gamma in [0.0, 0.01, 0.3] {
                let n = density_of_states(e, gamma, 1.0);
                assert!(n >= 0.0, "ε = {e}, Γ = {gamma}: {n}");
                if n.is_finite() {
                    assert!((n - density_of_states(-e, gamma, 1.0)).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn normal_state_is_flat() {
        assert!((density_of_states(0.3, 0.0, 0.0) - 1.0).abs() < 1e-15);
        assert_eq!(coherence_factor(0.3, 0.0, 0.0), 0.0);
    }
}
