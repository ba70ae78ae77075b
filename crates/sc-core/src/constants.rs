//! Physical and mathematical constants used by the formulas.
//!
//! Only the handful of scalars the theory needs; the full CODATA tables are
//! an external data source.

use crate::numeric::Real;

/// Boltzmann constant, CODATA 2018 (exact), eV/K.
pub const BOLTZMANN_EV_PER_K: Real = 8.617_333_262e-5;

/// Boltzmann constant, CODATA 2018 (exact), meV/K.
pub const BOLTZMANN_MEV_PER_K: Real = 1e3 * BOLTZMANN_EV_PER_K;

/// Euler-Mascheroni constant γ.
pub const EULER_GAMMA: Real = 0.577_215_664_901_532_9;

/// Apéry's constant ζ(3).
pub const ZETA_3: Real = 1.202_056_903_159_594_2;

/// Weak-coupling BCS ratio Δ(0) / (k_B Tc) = π e^{-γ}.
pub const BCS_GAP_RATIO: Real = 1.763_876_988_862_045_6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_ratio_matches_definition() {
        let expected = std::f64::consts::PI * (-EULER_GAMMA).exp();
        assert!((BCS_GAP_RATIO - expected).abs() < 1e-15);
    }

    #[test]
    fn boltzmann_units_agree() {
        assert!((BOLTZMANN_MEV_PER_K - 0.086_173_332_62).abs() < 1e-15);
    }
}
