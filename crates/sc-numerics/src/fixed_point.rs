//! Under-relaxed scalar fixed-point iteration.

use crate::error::{NumericsError, NumericsResult};
use serde::{Deserialize, Serialize};

/// Fixed-point iteration configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedPointConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Relative tolerance on successive iterates
    pub rel_tol: f64,
    /// Weight ω of the new iterate, in (0, 1]
    pub relaxation: f64,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            rel_tol: 1e-10,
            relaxation: 2.0 / 3.0,
        }
    }
}

/// Fixed-point iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointResult {
    /// Final iterate
    pub value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Solve `x = g(x)` with the damped update `x ← x + ω (g(x) - x)`.
///
/// Fails only when `g` leaves the finite reals or the configuration is
/// unusable. Hitting the iteration cap returns the last iterate with
/// `converged == false`.
pub fn relaxed_fixed_point<G>(
    g: G,
    x0: f64,
    config: &FixedPointConfig,
) -> NumericsResult<FixedPointResult>
where
    G: Fn(f64) -> f64,
{
    if !(config.relaxation > 0.0 && config.relaxation <= 1.0) {
        return Err(NumericsError::InvalidArg {
            what: "relaxation must lie in (0, 1]",
        });
    }
    if !x0.is_finite() {
        return Err(NumericsError::NonFinite {
            what: "fixed-point start",
            value: x0,
        });
    }

    let mut x = x0;
    for iter in 1..=config.max_iterations {
        let gx = g(x);
        if !gx.is_finite() {
            return Err(NumericsError::NonFinite {
                what: "fixed-point map",
                value: gx,
            });
        }
        let next = x + config.relaxation * (gx - x);
        let done = (next - x).abs() <= config.rel_tol * next.abs().max(f64::MIN_POSITIVE);
        x = next;
        if done {
            return Ok(FixedPointResult {
                value: x,
                iterations: iter,
                converged: true,
            });
        }
    }

    tracing::debug!(
        value = x,
        max_iterations = config.max_iterations,
        "relaxed_fixed_point hit its iteration cap"
    );
    Ok(FixedPointResult {
        value: x,
        iterations: config.max_iterations,
        converged: false,
    })
}
