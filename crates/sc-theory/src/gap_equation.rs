//! The BCS self-consistency equation in reduced units.
//!
//! Energies are measured in units of Δ(0), so the reduced thermal energy is
//! τ = k_B T / Δ(0) = t / r_Λ, with r_Λ the gap ratio of a band cut off at
//! Λ (π e^{-γ} as Λ → ∞). The equation
//!
//! ```text
//! ∫₀^Λ tanh(E / 2τ) / E dξ = asinh(Λ),   E = sqrt(ξ² + δ²)
//! ```
//!
//! is solved in the subtracted form
//!
//! ```text
//! F(δ, t) = -ln t + ∫₀^X [h(E) - h(ξ)] dξ + L(δ/Λ) - L(δ/X)
//! ```
//!
//! with h(x) = tanh(x / 2τ) / x, X = min(Λ, N τ) and L(r) = ln((1 + sqrt(1 + r²)) / 2)
//! the closed-form tail above X where tanh = 1. The normal-state part is
//! carried exactly by -ln t, so F(0⁺, t) = F(0, t) for every t and the root
//! vanishes continuously at t = 1.

use crate::config::Numerics;
use sc_core::constants::BCS_GAP_RATIO;

/// Gap ratio Δ(0) / k_B T_c of a band with half-width Λ Δ(0).
///
/// Tends to π e^{-γ} as Λ → ∞.
pub fn cutoff_gap_ratio(cutoff: f64) -> f64 {
    BCS_GAP_RATIO * tail_log(1.0 / cutoff).exp()
}

/// Reduced thermal energy τ = k_B T / Δ(0) for a band of half-width `cutoff`.
#[inline]
pub fn thermal_energy(t: f64, cutoff: f64) -> f64 {
    t / cutoff_gap_ratio(cutoff)
}

/// ln((1 + sqrt(1 + r²)) / 2) without cancellation at small r.
fn tail_log(r: f64) -> f64 {
    let excess = r * r / ((1.0 + r * r).sqrt() + 1.0);
    (0.5 * excess).ln_1p()
}

/// d/dδ of ln((1 + sqrt(1 + (δ/x)²)) / 2).
fn tail_log_slope(delta: f64, x: f64) -> f64 {
    let r = delta / x;
    let c = (1.0 + r * r).sqrt();
    r / (c * (1.0 + c) * x)
}

/// tanh(x / 2τ) / x, finite at x = 0.
fn pair_kernel(x: f64, tau: f64) -> f64 {
    let y = x / (2.0 * tau);
    if y < 1e-4 {
        (1.0 - y * y / 3.0) / (2.0 * tau)
    } else {
        y.tanh() / x
    }
}

/// (y sech²y - tanh y) / y³, the scaled derivative of tanh(y) / y.
fn pair_kernel_slope(y: f64) -> f64 {
    if y < 0.05 {
        let y2 = y * y;
        return -2.0 / 3.0 + 8.0 * y2 / 15.0 - 34.0 * y2 * y2 / 105.0;
    }
    let e = (-2.0 * y).exp();
    let sech2 = 4.0 * e / ((1.0 + e) * (1.0 + e));
    (y * sech2 - y.tanh()) / (y * y * y)
}

/// Thermal window X = min(Λ, N τ).
fn window(tau: f64, numerics: &Numerics) -> f64 {
    let gap = &numerics.config().gap;
    gap.bandwidth_cutoff.min(gap.fermi_cutoff * tau)
}

fn integral<W>(upper: f64, numerics: &Numerics, integrand: W) -> f64
where
    W: Fn(f64) -> f64,
{
    numerics
        .integrate(integrand, 0.0, upper)
        .map(|r| r.value)
        .unwrap_or(f64::NAN)
}

/// F(δ, t). Positive below the reduced gap, negative above it.
///
/// δ ≤ 0 gives the closed-form limit `-ln t`.
pub fn residual(delta: f64, t: f64, numerics: &Numerics) -> f64 {
    if delta <= 0.0 {
        return if t > 0.0 { -t.ln() } else { f64::INFINITY };
    }
    let cutoff = numerics.config().gap.bandwidth_cutoff;
    if t <= 0.0 {
        return (cutoff / delta).asinh() - cutoff.asinh();
    }
    let tau = thermal_energy(t, cutoff);
    let upper = window(tau, numerics);
    let paired = integral(upper, numerics, |xi| {
        pair_kernel(xi.hypot(delta), tau) - pair_kernel(xi, tau)
    });
    -t.ln() + paired + tail_log(delta / cutoff) - tail_log(delta / upper)
}

/// `(F, ∂F/∂δ)` for Newton steps.
pub fn residual_and_derivative(delta: f64, t: f64, numerics: &Numerics) -> (f64, f64) {
    let value = residual(delta, t, numerics);
    if delta <= 0.0 {
        return (value, f64::NEG_INFINITY);
    }

    let cutoff = numerics.config().gap.bandwidth_cutoff;
    if t <= 0.0 {
        return (value, -cutoff / (delta * delta.hypot(cutoff)));
    }

    let tau = thermal_energy(t, cutoff);
    let upper = window(tau, numerics);
    let scale = delta / (8.0 * tau * tau * tau);
    let paired = integral(upper, numerics, |xi| {
        scale * pair_kernel_slope(xi.hypot(delta) / (2.0 * tau))
    });
    let slope = paired + tail_log_slope(delta, cutoff) - tail_log_slope(delta, upper);
    (value, slope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gap_limit_is_minus_log_t() {
        let numerics = Numerics::default();
        assert!((residual(0.0, 0.5, &numerics) - 2.0_f64.ln()).abs() < 1e-15);
        assert!(residual(0.0, 0.0, &numerics).is_infinite());
        // the integral form approaches the limit continuously
        let near = residual(1e-6, 0.5, &numerics);
        assert!((near - 2.0_f64.ln()).abs() < 1e-6, "{near}");
    }

    #[test]
    fn residual_is_continuous_at_zero_gap_near_tc() {
        let numerics = Numerics::default();
        for t in [0.99, 0.999_999, 1.0] {
            let limit = residual(0.0, t, &numerics);
            let near = residual(1e-9, t, &numerics);
            assert!((near - limit).abs() < 1e-12, "t = {t}: {near} vs {limit}");
        }
    }

    #[test]
    fn low_temperature_matches_the_ground_state() {
        let numerics = Numerics::default();
        let value = residual(1.0, 1e-3, &numerics);
        assert!(value.abs() < 1e-9, "{value}");
    }

    #[test]
    fn cutoff_ratio_tends_to_weak_coupling_value() {
        assert!(cutoff_gap_ratio(1e3) > BCS_GAP_RATIO);
        assert!((cutoff_gap_ratio(1e3) / BCS_GAP_RATIO - 1.0 - 2.5e-7).abs() < 1e-12);
        assert!((cutoff_gap_ratio(1e8) - BCS_GAP_RATIO).abs() < 1e-15);
    }

    #[test]
    fn zero_temperature_root_is_one() {
        let numerics = Numerics::default();
        assert_eq!(residual(1.0, 0.0, &numerics), 0.0);
        assert!(residual(0.5, 0.0, &numerics) > 0.0);
        assert!(residual(1.5, 0.0, &numerics) < 0.0);
    }

    #[test]
    fn residual_is_decreasing_in_delta() {
        let numerics = Numerics::default();
        for t in [0.2, 0.6, 0.95] {
            let mut previous = f64::INFINITY;
            for i in 1..=20 {
                let value = residual(i as f64 / 20.0, t, &numerics);
                assert!(value < previous, "t = {t}");
                previous = value;
            }
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let numerics = Numerics::default();
        let points = [(0.3, 0.9), (0.8, 0.5), (0.99, 0.2), (0.5, 0.0), (0.05, 0.999)];
        for (delta, t) in points {
            let h = 1e-4;
            let (_, slope) = residual_and_derivative(delta, t, &numerics);
            let upper = residual(delta + h, t, &numerics);
            let lower = residual(delta - h, t, &numerics);
            let fd = (upper - lower) / (2.0 * h);
            assert!(
                (slope - fd).abs() < 1e-4 * fd.abs().max(1.0),
                "δ={delta} t={t}: {slope} vs {fd}"
            );
        }
    }
}
