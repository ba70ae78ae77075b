//! Domain-guarded elementary functions.
//!
//! The gap equation and the kernels evaluate `exp`, `sqrt` and `tanh` at
//! arguments that sit right at the edge of their domains (δ → 0, t → 0,
//! t → 1). These helpers return the nearest real value instead of NaN or
//! an overflow. NaN inputs are propagated unchanged.

use crate::numeric::Real;

/// Largest argument for which `exp` is finite in `f64`.
pub const EXP_MAX_ARG: Real = 709.782_712_893_384;
/// Below this argument `exp` underflows to zero in `f64`.
pub const EXP_MIN_ARG: Real = -745.133_219_101_941_1;
/// Beyond this magnitude `tanh` rounds to ±1 in `f64`.
pub const TANH_SATURATION: Real = 20.0;

/// `exp(x)` saturating to `f64::MAX` instead of overflowing to infinity.
#[inline]
pub fn safe_exp(x: Real) -> Real {
    if x.is_nan() {
        x
    } else if x > EXP_MAX_ARG {
        Real::MAX
    } else if x < EXP_MIN_ARG {
        0.0
    } else {
        x.exp()
    }
}

/// `sqrt(x)` with negative radicands (cancellation noise) clamped to 0.
#[inline]
pub fn safe_sqrt(x: Real) -> Real {
    if x.is_nan() {
        x
    } else if x <= 0.0 {
        0.0
    } else {
        x.sqrt()
    }
}

/// `cbrt(x)` for quantities that are non-negative by construction.
#[inline]
pub fn safe_cbrt(x: Real) -> Real {
    if x.is_nan() {
        x
    } else if x <= 0.0 {
        0.0
    } else {
        x.cbrt()
    }
}

/// `tanh(x)` using the exact asymptote past [`TANH_SATURATION`].
#[inline]
pub fn saturating_tanh(x: Real) -> Real {
    if x > TANH_SATURATION {
        1.0
    } else if x < -TANH_SATURATION {
        -1.0
    } else {
        x.tanh()
    }
}

/// Fermi-Dirac occupation `1 / (exp(x) + 1)` for `x = (E - μ) / k_B T`.
#[inline]
pub fn fermi(x: Real) -> Real {
    if x.is_nan() {
        return x;
    }
    if x >= 0.0 {
        let e = safe_exp(-x);
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + safe_exp(x))
    }
}

/// `f (1 - f)`, i.e. `-df/dx`, without cancellation in either tail.
#[inline]
pub fn fermi_weight(x: Real) -> Real {
    if x.is_nan() {
        return x;
    }
    let e = safe_exp(-x.abs());
    e / ((1.0 + e) * (1.0 + e))
}
