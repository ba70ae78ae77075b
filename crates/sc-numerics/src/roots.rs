//! Safeguarded Newton iteration for bracketed scalar roots.

use crate::error::{NumericsError, NumericsResult};
use serde::{Deserialize, Serialize};

/// Root finder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on |f(x)|
    pub f_tol: f64,
    /// Absolute tolerance on the bracket width
    pub x_tol: f64,
    /// Largest |f(x)| accepted as a root once the bracket collapses
    pub collapse_tol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            f_tol: 1e-13,
            x_tol: 1e-14,
            collapse_tol: 1e-10,
        }
    }
}

/// Root finder result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Best estimate of the root
    pub root: f64,
    /// f(root)
    pub residual: f64,
    /// Number of function evaluations inside the loop
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Newton-Raphson on a sign-changing bracket, falling back to bisection
/// whenever the Newton step leaves the bracket or stalls.
///
/// `f` returns `(f(x), f'(x))`. The bracket `[lo, hi]` must contain a sign
/// change. When the iteration cap is reached the iterate with the smallest
/// residual is returned with `converged == false`. A bracket that shrinks
/// below `x_tol` counts as converged only if |f| ≤ `collapse_tol` there;
/// otherwise the sign change was a jump, not a root.
pub fn newton_bisect<F>(
    f: F,
    lo: f64,
    hi: f64,
    guess: Option<f64>,
    config: &RootConfig,
) -> NumericsResult<RootResult>
where
    F: Fn(f64) -> (f64, f64),
{
    if !(lo.is_finite() && hi.is_finite() && lo < hi) {
        return Err(NumericsError::InvalidArg {
            what: "bracket must satisfy lo < hi with finite ends",
        });
    }

    let (f_lo, _) = f(lo);
    let (f_hi, _) = f(hi);
    if !f_lo.is_finite() {
        return Err(NumericsError::NonFinite {
            what: "f(lo)",
            value: f_lo,
        });
    }
    if !f_hi.is_finite() {
        return Err(NumericsError::NonFinite {
            what: "f(hi)",
            value: f_hi,
        });
    }
    if f_lo == 0.0 {
        return Ok(RootResult {
            root: lo,
            residual: 0.0,
            iterations: 0,
            converged: true,
        });
    }
    if f_hi == 0.0 {
        return Ok(RootResult {
            root: hi,
            residual: 0.0,
            iterations: 0,
            converged: true,
        });
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(NumericsError::NotBracketed { lo, hi, f_lo, f_hi });
    }

    // Orient so that f(x_neg) < 0 < f(x_pos)
    let (mut x_neg, mut x_pos) = if f_lo < 0.0 { (lo, hi) } else { (hi, lo) };
    let mut x = guess
        .filter(|g| *g > lo && *g < hi)
        .unwrap_or(0.5 * (lo + hi));
    let mut dx_old = hi - lo;

    let mut best = RootResult {
        root: if f_lo.abs() < f_hi.abs() { lo } else { hi },
        residual: if f_lo.abs() < f_hi.abs() { f_lo } else { f_hi },
        iterations: 0,
        converged: false,
    };

    for iter in 1..=config.max_iterations {
        let (fx, dfx) = f(x);
        if !fx.is_finite() {
            return Err(NumericsError::NonFinite {
                what: "f(x) inside bracket",
                value: fx,
            });
        }
        if fx.abs() < best.residual.abs() {
            best = RootResult {
                root: x,
                residual: fx,
                iterations: iter,
                converged: false,
            };
        }

        // Check convergence
        if fx.abs() < config.f_tol {
            return Ok(RootResult {
                root: x,
                residual: fx,
                iterations: iter,
                converged: true,
            });
        }

        if fx < 0.0 {
            x_neg = x;
        } else {
            x_pos = x;
        }
        let (b_lo, b_hi) = (x_neg.min(x_pos), x_neg.max(x_pos));
        if b_hi - b_lo < config.x_tol {
            let converged = fx.abs() <= config.collapse_tol;
            if !converged {
                tracing::debug!(root = x, residual = fx, "bracket collapsed onto a jump");
            }
            return Ok(RootResult {
                root: x,
                residual: fx,
                iterations: iter,
                converged,
            });
        }

        // Newton step only if it stays inside the bracket and halves the error
        let newton = x - fx / dfx;
        let inside = newton.is_finite() && newton > b_lo && newton < b_hi;
        let fast = (2.0 * fx).abs() <= (dx_old * dfx).abs();
        if inside && fast {
            dx_old = (newton - x).abs();
            x = newton;
        } else {
            dx_old = 0.5 * (b_hi - b_lo);
            x = b_lo + dx_old;
        }
    }

    tracing::debug!(
        root = best.root,
        residual = best.residual,
        max_iterations = config.max_iterations,
        "newton_bisect hit its iteration cap"
    );
    best.iterations = config.max_iterations;
    Ok(best)
}
