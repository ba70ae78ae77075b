use crate::ScError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ScError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ScError::NonFinite { what, value: v })
    }
}

/// Strictly positive, finite.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ScError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ScError::OutOfDomain { what, value: v })
    }
}

/// Clamp `v` into `[0, 1]`, reporting whether the clamp changed it.
///
/// NaN is mapped to 0 and reported as clamped.
pub fn clamp_unit(v: Real) -> (Real, bool) {
    if v.is_nan() {
        (0.0, true)
    } else if v < 0.0 {
        (0.0, true)
    } else if v > 1.0 {
        (1.0, true)
    } else {
        (v, false)
    }
}

/// Reduced temperature `t = T / Tc`.
///
/// A non-positive critical temperature means no superconducting phase, so
/// every temperature is reported as above it.
pub fn reduced_temperature(temperature: Real, critical_temperature: Real) -> Real {
    if critical_temperature <= 0.0 {
        return Real::INFINITY;
    }
    temperature / critical_temperature
}
