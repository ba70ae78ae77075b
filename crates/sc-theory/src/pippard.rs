//! Pippard's non-local electrodynamics.
//!
//! K(q) = λ(t)⁻² (ξ(t)/ξ(0)) g(q ξ(t)) with the angular factor
//! g(x) = (3/2)[(1 + x²) atan x - x] / x³ and the coherence length
//! 1/ξ(t) = J₀(t)/ξ₀ + 1/ℓ borrowed from BCS theory. The prefactor is
//! normalized to the impure ξ(0), so K(0) = λ(t)⁻² at any mean free path.

use crate::bcs;
use crate::config::Numerics;
use crate::kernel::{self, ElectrodynamicKernel};
use crate::london::TemperatureLaw;
use crate::material::MaterialParameters;
use sc_core::constants::{BOLTZMANN_MEV_PER_K, ZETA_3};
use sc_core::numeric::clamp_unit;
use sc_core::special::{safe_cbrt, saturating_tanh};
use sc_core::{Evaluation, Status};
use std::f64::consts::PI;

/// Below this argument g is evaluated from its Taylor series.
const SERIES_THRESHOLD: f64 = 0.05;
/// Above this argument g is evaluated from its asymptotic expansion.
const ASYMPTOTIC_THRESHOLD: f64 = 1e8;

/// Pippard angular factor, g(0) = 1 and g(x) ~ 3π/(4x).
pub fn g(x: f64) -> f64 {
    let x = x.abs();
    if x < SERIES_THRESHOLD {
        let x2 = x * x;
        1.0 - x2 / 5.0 + 3.0 * x2 * x2 / 35.0 - x2 * x2 * x2 / 21.0 + x2 * x2 * x2 * x2 / 33.0
    } else if x > ASYMPTOTIC_THRESHOLD {
        if x.is_infinite() {
            return 0.0;
        }
        3.0 * PI / (4.0 * x) - 3.0 / (x * x)
    } else {
        1.5 * ((1.0 + x * x) * x.atan() - x) / (x * x * x)
    }
}

/// g(x) as the Fermi-surface average (3/4) ∫₋₁¹ (1 - u²)/(1 + x²u²) du.
pub fn angular_integral(x: f64, numerics: &Numerics) -> f64 {
    let x2 = x * x;
    numerics
        .integrate(|u| (1.0 - u * u) / (1.0 + x2 * u * u), 0.0, 1.0)
        .map(|r| 1.5 * r.value)
        .unwrap_or(f64::NAN)
}

/// J₀(t) = (λ(t)/λ_L)² δ(t) tanh(Δ(T) / 2k_B T), the BCS zero-wavevector
/// response in units of its T = 0 value.
///
/// At and above Tc the 0·∞ product is replaced by its limit.
pub fn j0(
    t: f64,
    params: &MaterialParameters,
    law: TemperatureLaw,
    numerics: &Numerics,
) -> Evaluation {
    let (tc, clamped) = clamp_unit(t);
    let status = if clamped { Status::Clamped } else { Status::Converged };
    if tc <= 0.0 {
        return Evaluation::new(1.0, status);
    }
    let gap = bcs::reduced_gap(tc, numerics);
    if gap.value <= 0.0 {
        return Evaluation::new(j0_critical_limit(params, law), status.worst(gap.status));
    }
    let depth = law.reduced_depth(tc, numerics);
    if !depth.value.is_finite() {
        return Evaluation::new(j0_critical_limit(params, law), status.worst(gap.status));
    }
    let thermal = params.reduced_thermal_energy(tc);
    let pairing = gap.value * saturating_tanh(gap.value / (2.0 * thermal));
    let value = depth.value * depth.value * pairing;
    Evaluation::new(value, status.worst(gap.status).worst(depth.status))
}

/// lim t→1⁻ of J₀. Near Tc, Δ² ≈ (8π²/7ζ(3)) (k_B Tc)² (1 - t).
fn j0_critical_limit(params: &MaterialParameters, law: TemperatureLaw) -> f64 {
    match law {
        TemperatureLaw::PowerLaw { exponent } => {
            let kt_over_gap = BOLTZMANN_MEV_PER_K * params.critical_temperature
                / params.zero_temperature_gap();
            4.0 * PI * PI / (7.0 * ZETA_3) * kt_over_gap / exponent
        }
        TemperatureLaw::BcsGap => 0.0,
    }
}

fn inverse_sum_length(inverse_coherence: f64, mean_free_path: f64) -> f64 {
    let fraction = inverse_coherence + 1.0 / mean_free_path;
    if fraction.is_infinite() {
        0.0
    } else if fraction == 0.0 {
        f64::INFINITY
    } else {
        1.0 / fraction
    }
}

/// ξ(t) in nm.
pub fn coherence_length(
    t: f64,
    params: &MaterialParameters,
    law: TemperatureLaw,
    numerics: &Numerics,
) -> Evaluation {
    j0(t, params, law, numerics)
        .map(|j| inverse_sum_length(j / params.coherence_length, params.mean_free_path))
}

/// ξ(t) / ξ(0).
pub fn reduced_coherence_length(
    t: f64,
    params: &MaterialParameters,
    law: TemperatureLaw,
    numerics: &Numerics,
) -> Evaluation {
    let zero = inverse_sum_length(1.0 / params.coherence_length, params.mean_free_path);
    coherence_length(t, params, law, numerics).map(|xi| xi / zero)
}

/// (√3 ξ₀ λ_L² / 2π)^{1/3}, the clean-limit depth when ξ₀ ≫ λ_L.
pub fn extreme_anomalous_penetration_depth(params: &MaterialParameters) -> f64 {
    let lambda = params.london_penetration_depth;
    safe_cbrt(3.0_f64.sqrt() * params.coherence_length * lambda * lambda / (2.0 * PI))
}

/// Pippard kernel at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PippardKernel {
    inverse_square_depth: f64,
    coherence_length: f64,
    coherence_ratio: f64,
    status: Status,
}

impl PippardKernel {
    pub fn new(
        t: f64,
        params: &MaterialParameters,
        law: TemperatureLaw,
        numerics: &Numerics,
    ) -> Self {
        let depth = law
            .reduced_depth(t, numerics)
            .map(|r| r * params.london_penetration_depth);
        let xi = coherence_length(t, params, law, numerics);
        let xi_zero = inverse_sum_length(1.0 / params.coherence_length, params.mean_free_path);
        let inverse_square_depth = if depth.value.is_finite() {
            1.0 / (depth.value * depth.value)
        } else {
            0.0
        };
        Self {
            inverse_square_depth,
            coherence_length: xi.value,
            coherence_ratio: xi.value / xi_zero,
            status: depth.status.worst(xi.status),
        }
    }

    /// ξ(t) in nm.
    pub fn coherence_length(&self) -> f64 {
        self.coherence_length
    }
}

impl ElectrodynamicKernel for PippardKernel {
    fn kernel(&self, q: f64) -> f64 {
        if self.inverse_square_depth == 0.0 {
            return 0.0;
        }
        self.inverse_square_depth * self.coherence_ratio * self.reduced_kernel(q)
    }

    fn reduced_kernel(&self, q: f64) -> f64 {
        if q == 0.0 {
            return 1.0;
        }
        g(q * self.coherence_length)
    }

    fn status(&self) -> Status {
        self.status
    }
}

/// K(q) in nm⁻².
pub fn kernel(
    q: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = PippardKernel::new(t, params, law, numerics);
    Evaluation::new(k.kernel(q), k.status())
}

/// K(q) / K(0) = g(q ξ(t)).
pub fn reduced_kernel(
    q: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = PippardKernel::new(t, params, law, numerics);
    Evaluation::new(k.reduced_kernel(q), k.status())
}

/// Self-consistent penetration depth (nm).
pub fn penetration_depth(
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = PippardKernel::new(t, params, law, numerics);
    kernel::effective_penetration_depth(&k, numerics)
}

/// λ(t) / λ(0).
pub fn reduced_penetration_depth(
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let zero = penetration_depth(0.0, law, params, numerics);
    let depth = penetration_depth(t, law, params, numerics);
    if depth.value.is_infinite() {
        return depth;
    }
    Evaluation::new(depth.value / zero.value, depth.status.worst(zero.status))
}

/// B(z) / B(0) at depth `z` (nm).
pub fn reduced_field_penetration(
    z: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = PippardKernel::new(t, params, law, numerics);
    kernel::reduced_field_penetration(&k, z, numerics)
}

/// B(z) in the units of `applied_field`.
pub fn field_penetration(
    z: f64,
    applied_field: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    reduced_field_penetration(z, t, law, params, numerics).map(|b| applied_field * b)
}
