//! Gorter-Casimir two-fluid model: the power law with exponent 4.

use crate::phenomenology;
use sc_core::numeric::clamp_unit;
use sc_core::{Evaluation, Status};

/// Exponent of the two-fluid superfluid density 1 - t⁴.
pub const EXPONENT: f64 = 4.0;

/// λ(t) / λ(0) = 1 / sqrt(1 - t⁴).
pub fn reduced_penetration_depth(t: f64) -> Evaluation {
    phenomenology::reduced_penetration_depth(t, EXPONENT)
}

pub fn penetration_depth(t: f64, lambda_0: f64) -> Evaluation {
    phenomenology::penetration_depth(t, EXPONENT, lambda_0)
}

/// Superfluid fraction n_s / n = 1 - t⁴.
pub fn superfluid_fraction(t: f64) -> Evaluation {
    let (t, clamped) = clamp_unit(t);
    let status = if clamped { Status::Clamped } else { Status::Converged };
    Evaluation::new(1.0 - t.powf(EXPONENT), status)
}
