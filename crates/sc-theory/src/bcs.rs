//! BCS theory: the temperature-dependent gap and the non-local kernel.
//!
//! The kernel is written as a sum over fermionic Matsubara frequencies
//! ω_n = π k_B T (2n + 1):
//!
//! ```text
//! K(q) = Σₙ 2a F(a(2n+1)),  F(x) = g(q ξ(x)) / (λ_L² (1 + ξ(x)/ℓ) (1 + x²)^{3/2})
//! ```
//!
//! with a = π k_B T / Δ(T) and 1/ξ(x) = (2/π) sqrt(1 + x²) δ / ξ₀ + 1/ℓ.
//! The first few terms are summed directly; the remainder is a midpoint
//! sum with spacing 2a and is replaced by its integral plus the leading
//! Euler-Maclaurin correction. At T = 0 the sum is exactly the integral.

use crate::config::Numerics;
use crate::gap_equation;
use crate::kernel::{self, ElectrodynamicKernel};
use crate::material::MaterialParameters;
use crate::phenomenology;
use sc_core::constants::{BCS_GAP_RATIO, BOLTZMANN_MEV_PER_K};
use sc_core::numeric::{clamp_unit, reduced_temperature};
use sc_core::special::safe_sqrt;
use sc_core::{Evaluation, Status};
use sc_numerics::newton_bisect;
use std::f64::consts::{FRAC_2_PI, FRAC_PI_2, PI};

pub use crate::pippard::g;

/// δ(t) = Δ(T)/Δ(0) from the weak-coupling gap equation.
///
/// `t <= 0` gives exactly 1 and `t` within the configured margin of 1 (or
/// above) gives 0. Values outside [0, 1] are reported as `Clamped`.
pub fn reduced_gap(t: f64, numerics: &Numerics) -> Evaluation {
    let (t, clamped) = clamp_unit(t);
    let status = if clamped { Status::Clamped } else { Status::Converged };
    if t <= 0.0 {
        return Evaluation::new(1.0, status);
    }
    if t >= 1.0 - numerics.config().gap.critical_margin {
        return Evaluation::new(0.0, status);
    }
    reduced_gap_solver(t, numerics).with_status(status)
}

/// Solve F(δ, t) = 0 on δ ∈ [0, 1] for `0 < t < 1`.
pub fn reduced_gap_solver(t: f64, numerics: &Numerics) -> Evaluation {
    let guess = safe_sqrt(1.0 - t.powi(4));
    let solved = newton_bisect(
        |delta| gap_equation::residual_and_derivative(delta, t, numerics),
        0.0,
        1.0,
        Some(guess),
        &numerics.config().gap.root,
    );
    match solved {
        Ok(result) => {
            let delta = result.root.clamp(0.0, 1.0);
            if result.converged {
                tracing::debug!(t, delta, iterations = result.iterations, "reduced gap solved");
                Evaluation::converged(delta)
            } else {
                tracing::warn!(
                    t,
                    delta,
                    residual = result.residual,
                    "reduced gap solver did not converge"
                );
                Evaluation::not_converged(delta)
            }
        }
        Err(err) => {
            // Halbritter's form keeps δ in [0, 1] and monotone
            tracing::warn!(%err, t, "reduced gap solver failed, using Halbritter's form");
            Evaluation::not_converged(phenomenology::reduced_gap(t).value)
        }
    }
}

/// δ at absolute temperature `temperature` (K).
pub fn reduced_gap_at(
    temperature: f64,
    critical_temperature: f64,
    numerics: &Numerics,
) -> Evaluation {
    reduced_gap(reduced_temperature(temperature, critical_temperature), numerics)
}

/// Δ(T) in meV.
pub fn gap(
    temperature: f64,
    critical_temperature: f64,
    gap_mev: f64,
    numerics: &Numerics,
) -> Evaluation {
    reduced_gap_at(temperature, critical_temperature, numerics).map(|d| d * gap_mev)
}

/// Weak-coupling Δ(0) = π e^{-γ} k_B Tc in meV.
pub fn gap_mev(critical_temperature: f64) -> f64 {
    BCS_GAP_RATIO * BOLTZMANN_MEV_PER_K * critical_temperature
}

/// 2Δ(0) / k_B Tc; 3.528 in the weak-coupling limit.
pub fn gap_ratio(critical_temperature: f64, gap_mev: f64) -> f64 {
    2.0 * gap_mev / (BOLTZMANN_MEV_PER_K * critical_temperature)
}

/// Matsubara spacing a = π k_B T / Δ(T); infinite in the normal state.
pub fn matsubara_step(t: f64, reduced_gap: f64, params: &MaterialParameters) -> f64 {
    if reduced_gap <= 0.0 {
        return f64::INFINITY;
    }
    PI * params.reduced_thermal_energy(t) / reduced_gap
}

/// f_n = sqrt(1 + (a(2n+1))²).
pub fn f(a: f64, n: usize) -> f64 {
    let x = a * (2 * n + 1) as f64;
    (1.0 + x * x).sqrt()
}

/// ξ at reduced frequency x: 1/ξ = (2/π) sqrt(1 + x²) δ/ξ₀ + 1/ℓ.
pub fn coherence_length(frequency: f64, reduced_gap: f64, params: &MaterialParameters) -> f64 {
    let fraction = FRAC_2_PI * frequency.hypot(1.0) * reduced_gap / params.coherence_length
        + 1.0 / params.mean_free_path;
    if fraction.is_infinite() {
        0.0
    } else if fraction == 0.0 {
        f64::INFINITY
    } else {
        1.0 / fraction
    }
}

/// BCS kernel at one temperature.
#[derive(Debug, Clone)]
pub struct BcsKernel<'a> {
    params: MaterialParameters,
    numerics: &'a Numerics,
    t: f64,
    reduced_gap: f64,
    step: f64,
    terms: usize,
    zero_q: f64,
    status: Status,
}

impl<'a> BcsKernel<'a> {
    /// Solves for δ(t) once; every later evaluation reuses it.
    pub fn new(t: f64, params: &MaterialParameters, numerics: &'a Numerics) -> Self {
        let (tc, _) = clamp_unit(t);
        let gap = reduced_gap(t, numerics);
        let step = if tc <= 0.0 {
            0.0
        } else {
            matsubara_step(tc, gap.value, params)
        };
        let matsubara = &numerics.config().matsubara;
        let terms = if step == 0.0 || !step.is_finite() {
            0
        } else {
            let needed = (matsubara.tail_onset / (2.0 * step)).ceil();
            (needed as usize).clamp(matsubara.min_terms, matsubara.max_terms)
        };
        let status = if gap.value <= 0.0 {
            gap.status.worst(Status::Singular)
        } else {
            gap.status
        };
        let mut kernel = Self {
            params: *params,
            numerics,
            t: tc,
            reduced_gap: gap.value,
            step,
            terms,
            zero_q: 0.0,
            status,
        };
        kernel.zero_q = kernel.kernel(0.0);
        kernel
    }

    /// Reduced temperature the kernel was built for, after clamping.
    pub fn reduced_temperature(&self) -> f64 {
        self.t
    }

    pub fn reduced_gap(&self) -> f64 {
        self.reduced_gap
    }

    pub fn matsubara_step(&self) -> f64 {
        self.step
    }

    /// λ_L² K(q).
    fn scaled_kernel(&self, q: f64) -> f64 {
        let a = self.step;
        let inverse_path = 1.0 / self.params.mean_free_path;
        let response = |x: f64| {
            let xi = coherence_length(x, self.reduced_gap, &self.params);
            g(q * xi) / (1.0 + xi * inverse_path)
        };
        let weighted = |x: f64| {
            let s = 1.0 + x * x;
            response(x) / (s * s.sqrt())
        };

        let sum: f64 = (0..self.terms)
            .map(|n| 2.0 * a * weighted(a * (2 * n + 1) as f64))
            .sum();

        // remainder from x0 on, integrated in θ = atan x
        let x0 = 2.0 * self.terms as f64 * a;
        let tail = self
            .numerics
            .integrate(
                |theta| {
                    if theta >= FRAC_PI_2 {
                        0.0
                    } else {
                        response(theta.tan()) * theta.cos()
                    }
                },
                x0.atan(),
                FRAC_PI_2,
            )
            .map(|r| r.value)
            .unwrap_or(f64::NAN);

        let h = 1e-5 * x0.max(1.0);
        let lo = (x0 - h).max(0.0);
        let slope = (weighted(x0 + h) - weighted(lo)) / (x0 + h - lo);
        sum + tail + a * a / 6.0 * slope
    }

    /// Shape of K(q) as T → Tc⁻, where a δ stays finite and only the
    /// (2n+1)⁻³ weights survive.
    fn critical_shape(&self, q: f64) -> f64 {
        let a_delta = PI * self.params.reduced_thermal_energy(1.0);
        let inverse_path = 1.0 / self.params.mean_free_path;
        (0..self.numerics.config().matsubara.max_terms)
            .map(|n| {
                let m = (2 * n + 1) as f64;
                let fraction =
                    FRAC_2_PI * m * a_delta / self.params.coherence_length + inverse_path;
                let xi = 1.0 / fraction;
                g(q * xi) / ((1.0 + xi * inverse_path) * m * m * m)
            })
            .sum()
    }
}

impl ElectrodynamicKernel for BcsKernel<'_> {
    fn kernel(&self, q: f64) -> f64 {
        if self.reduced_gap <= 0.0 {
            return 0.0;
        }
        let lambda = self.params.london_penetration_depth;
        self.scaled_kernel(q) / (lambda * lambda)
    }

    fn reduced_kernel(&self, q: f64) -> f64 {
        if q == 0.0 {
            return 1.0;
        }
        if self.reduced_gap <= 0.0 {
            return self.critical_shape(q) / self.critical_shape(0.0);
        }
        self.kernel(q) / self.zero_q
    }

    fn status(&self) -> Status {
        self.status
    }
}

/// K(q) in nm⁻²; 0 (`Singular`) at and above Tc.
pub fn kernel(q: f64, t: f64, params: &MaterialParameters, numerics: &Numerics) -> Evaluation {
    let k = BcsKernel::new(t, params, numerics);
    Evaluation::new(k.kernel(q), k.status())
}

/// K(q) / K(0).
pub fn reduced_kernel(
    q: f64,
    t: f64,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = BcsKernel::new(t, params, numerics);
    Evaluation::new(k.reduced_kernel(q), k.status())
}

/// Self-consistent penetration depth (nm).
pub fn penetration_depth(t: f64, params: &MaterialParameters, numerics: &Numerics) -> Evaluation {
    let k = BcsKernel::new(t, params, numerics);
    kernel::effective_penetration_depth(&k, numerics)
}

/// λ(t) / λ(0).
pub fn reduced_penetration_depth(
    t: f64,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let depth = penetration_depth(t, params, numerics);
    if depth.value.is_infinite() {
        return depth;
    }
    let zero = penetration_depth(0.0, params, numerics);
    Evaluation::new(depth.value / zero.value, depth.status.worst(zero.status))
}

/// B(z) / B(0) at depth `z` (nm).
pub fn reduced_field_penetration(
    z: f64,
    t: f64,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = BcsKernel::new(t, params, numerics);
    kernel::reduced_field_penetration(&k, z, numerics)
}

/// B(z) in the units of `applied_field`.
pub fn field_penetration(
    z: f64,
    applied_field: f64,
    t: f64,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    reduced_field_penetration(z, t, params, numerics).map(|b| applied_field * b)
}
