//! Electrodynamic kernel trait and the penetration-depth machinery that
//! works for any kernel.
//!
//! A kernel K(q) (nm⁻², q in nm⁻¹) relates the vector potential to the
//! screening current in wavevector space. For a specular surface the field
//! profile is
//!
//! ```text
//! B(z) / B(0) = (2/π) ∫₀^∞ q sin(qz) / (q² + K(q)) dq
//! ```
//!
//! which for a local kernel K(q) = K(0) is exactly `exp(-z sqrt(K(0)))`.

use crate::config::Numerics;
use sc_core::special::safe_exp;
use sc_core::{Evaluation, Status};
use sc_numerics::{relaxed_fixed_point, sine_transform};
use std::f64::consts::{FRAC_2_PI, FRAC_PI_2};

/// Response kernel of a superconductor at a fixed temperature.
///
/// Implementations are constructed once per temperature (solving for the
/// gap as needed) and then evaluated at many wavevectors.
pub trait ElectrodynamicKernel: Send + Sync {
    /// K(q) in nm⁻².
    fn kernel(&self, q: f64) -> f64;

    /// K(q) / K(0). In the normal state (K ≡ 0) the local shape 1 is used.
    fn reduced_kernel(&self, q: f64) -> f64 {
        let k0 = self.kernel(0.0);
        if k0 > 0.0 {
            self.kernel(q) / k0
        } else {
            1.0
        }
    }

    /// How far the temperature-dependent inputs can be trusted.
    fn status(&self) -> Status;

    /// True if K(q) does not depend on q.
    fn is_local(&self) -> bool {
        false
    }
}

/// λ = K(0)^{-1/2}.
pub fn local_penetration_depth<K>(kernel: &K) -> Evaluation
where
    K: ElectrodynamicKernel + ?Sized,
{
    let k0 = kernel.kernel(0.0);
    if !(k0 > 0.0) || k0.is_infinite() {
        return Evaluation::singular().with_status(kernel.status());
    }
    Evaluation::new(1.0 / k0.sqrt(), kernel.status())
}

/// Self-consistent decay length λ = K(1/λ)^{-1/2}.
///
/// Solved by under-relaxed fixed-point iteration started from the local
/// depth. Local kernels return the local depth directly.
pub fn effective_penetration_depth<K>(kernel: &K, numerics: &Numerics) -> Evaluation
where
    K: ElectrodynamicKernel + ?Sized,
{
    let local = local_penetration_depth(kernel);
    if kernel.is_local() || !local.value.is_finite() {
        return local;
    }

    let update = |lambda: f64| {
        let k = kernel.kernel(1.0 / lambda);
        if k > 0.0 { 1.0 / k.sqrt() } else { f64::INFINITY }
    };
    match relaxed_fixed_point(update, local.value, &numerics.config().penetration) {
        Ok(result) if result.converged => Evaluation::new(result.value, kernel.status()),
        Ok(result) => {
            tracing::warn!(
                depth = result.value,
                iterations = result.iterations,
                "effective penetration depth did not converge"
            );
            Evaluation::new(result.value, kernel.status()).with_status(Status::NotConverged)
        }
        Err(err) => {
            tracing::warn!(%err, "effective penetration depth failed, using local depth");
            local.with_status(Status::NotConverged)
        }
    }
}

/// ∫₀^∞ B(z) dz / B(0) = (2/π) ∫₀^∞ dq / (q² + K(q)).
///
/// Evaluated after the substitution q = sqrt(K(0)) tan θ, which maps the
/// half line onto [0, π/2) and makes the local integrand constant.
pub fn integrated_penetration_depth<K>(kernel: &K, numerics: &Numerics) -> Evaluation
where
    K: ElectrodynamicKernel + ?Sized,
{
    let local = local_penetration_depth(kernel);
    if kernel.is_local() || !local.value.is_finite() {
        return local;
    }

    let k0 = kernel.kernel(0.0);
    let scale = k0.sqrt();
    let integrand = |theta: f64| {
        if theta >= FRAC_PI_2 {
            return 1.0 / scale;
        }
        let tan = theta.tan();
        let sec2 = 1.0 + tan * tan;
        scale * sec2 / (k0 * tan * tan + kernel.kernel(scale * tan))
    };
    match numerics.integrate(integrand, 0.0, FRAC_PI_2) {
        Ok(result) => {
            let status = if result.converged {
                kernel.status()
            } else {
                kernel.status().worst(Status::NotConverged)
            };
            Evaluation::new(FRAC_2_PI * result.value, status)
        }
        Err(err) => {
            tracing::warn!(%err, "integrated penetration depth failed, using local depth");
            local.with_status(Status::NotConverged)
        }
    }
}

/// B(z) / B(0) at depth `z` (nm).
///
/// Written as `exp(-z sqrt(K0))` plus the sine transform of the non-local
/// remainder `q (K0 - K(q)) / ((q² + K(q)) (q² + K0))`. Returns 1 for
/// `z <= 0` and in the normal state. Quadrature noise in the far tail is
/// clamped at 0.
pub fn reduced_field_penetration<K>(kernel: &K, z: f64, numerics: &Numerics) -> Evaluation
where
    K: ElectrodynamicKernel + ?Sized,
{
    if z <= 0.0 {
        return Evaluation::converged(1.0);
    }
    let k0 = kernel.kernel(0.0);
    let status = kernel.status();
    if !(k0 > 0.0) {
        // normal state: the field penetrates unscreened
        return Evaluation::new(1.0, status);
    }
    let screened = safe_exp(-z * k0.sqrt());
    if kernel.is_local() {
        return Evaluation::new(screened, status);
    }

    let remainder = |q: f64| {
        let k = kernel.kernel(q);
        let q2 = q * q;
        q * (k0 - k) / ((q2 + k) * (q2 + k0))
    };
    let config = numerics.config();
    match sine_transform(
        remainder,
        z,
        numerics.rule(),
        &config.quadrature,
        &config.sine_transform,
    ) {
        Ok(result) => {
            let value = (screened + FRAC_2_PI * result.value).max(0.0);
            if result.converged {
                Evaluation::new(value, status)
            } else {
                tracing::debug!(
                    z,
                    error_estimate = result.error_estimate,
                    "field profile sine transform above tolerance"
                );
                Evaluation::new(value, status.worst(Status::NotConverged))
            }
        }
        Err(err) => {
            tracing::warn!(%err, z, "field profile sine transform failed");
            Evaluation::new(screened, status.worst(Status::NotConverged))
        }
    }
}
