//! Gauss-Legendre quadrature with adaptive bisection.
//!
//! Nodes come from the Golub-Welsch eigenproblem of the Legendre Jacobi
//! matrix, polished with a few Newton steps on the three-term recurrence.
//! The adaptive driver keeps an explicit work stack so deep refinement near
//! an integrable kink never grows the call stack.

use crate::error::{NumericsError, NumericsResult};
use nalgebra::{DMatrix, SymmetricEigen};
use serde::{Deserialize, Serialize};

/// Adaptive quadrature configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadConfig {
    /// Gauss-Legendre points per panel
    pub order: usize,
    /// Relative tolerance per panel
    pub rel_tol: f64,
    /// Absolute tolerance per panel
    pub abs_tol: f64,
    /// Maximum bisection depth
    pub max_depth: usize,
}

impl Default for QuadConfig {
    fn default() -> Self {
        Self {
            order: 20,
            rel_tol: 1e-11,
            abs_tol: 1e-13,
            max_depth: 30,
        }
    }
}

/// Adaptive quadrature result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadResult {
    /// Integral estimate
    pub value: f64,
    /// Sum of the per-panel refinement differences
    pub error_estimate: f64,
    /// Integrand evaluations
    pub evaluations: usize,
    /// False if some panel hit the depth cap
    pub converged: bool,
}

impl QuadResult {
    fn zero() -> Self {
        Self {
            value: 0.0,
            error_estimate: 0.0,
            evaluations: 0,
            converged: true,
        }
    }

    fn absorb(&mut self, other: QuadResult) {
        self.value += other.value;
        self.error_estimate += other.error_estimate;
        self.evaluations += other.evaluations;
        self.converged &= other.converged;
    }
}

/// Fixed-order Gauss-Legendre rule on [-1, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Build an `order`-point rule. An order of zero is treated as one.
    pub fn new(order: usize) -> Self {
        let n = order.max(1);

        let mut jacobi = DMatrix::<f64>::zeros(n, n);
        for k in 1..n {
            let kf = k as f64;
            let beta = kf / (4.0 * kf * kf - 1.0).sqrt();
            jacobi[(k - 1, k)] = beta;
            jacobi[(k, k - 1)] = beta;
        }
        let eigen = SymmetricEigen::new(jacobi);

        let mut pairs: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let v0 = eigen.eigenvectors[(0, i)];
                polish_node(n, eigen.eigenvalues[i], 2.0 * v0 * v0)
            })
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        Self {
            nodes: pairs.iter().map(|p| p.0).collect(),
            weights: pairs.iter().map(|p| p.1).collect(),
        }
    }

    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Apply the rule once on `[a, b]`.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let half = 0.5 * (b - a);
        let mid = 0.5 * (a + b);
        let sum: f64 = self
            .nodes
            .iter()
            .zip(&self.weights)
            .map(|(x, w)| w * f(mid + half * x))
            .sum();
        half * sum
    }
}

/// Legendre polynomial P_n(x) and its derivative.
fn legendre(n: usize, x: f64) -> (f64, f64) {
    let (mut p0, mut p1) = (1.0, x);
    for k in 2..=n {
        let kf = k as f64;
        let p2 = ((2.0 * kf - 1.0) * x * p1 - (kf - 1.0) * p0) / kf;
        p0 = p1;
        p1 = p2;
    }
    if n == 0 {
        return (1.0, 0.0);
    }
    let dp = n as f64 * (x * p1 - p0) / (x * x - 1.0);
    (p1, dp)
}

/// Newton-refine an eigenvalue node; keep the Golub-Welsch pair if the
/// refinement does not behave.
fn polish_node(n: usize, x0: f64, w0: f64) -> (f64, f64) {
    if n == 1 {
        return (0.0, 2.0);
    }
    let mut x = x0;
    for _ in 0..3 {
        let (p, dp) = legendre(n, x);
        let step = p / dp;
        if !step.is_finite() {
            return (x0, w0);
        }
        x -= step;
    }
    if (x - x0).abs() > 1e-8 || x.abs() >= 1.0 {
        return (x0, w0);
    }
    let (_, dp) = legendre(n, x);
    (x, 2.0 / ((1.0 - x * x) * dp * dp))
}

/// Adaptive Gauss-Legendre integration of `f` over `[a, b]`.
///
/// A panel is accepted when splitting it in two changes the estimate by no
/// more than `max(abs_tol, rel_tol * |estimate|)`. Panels at `max_depth` are
/// accepted as they are and clear the `converged` flag.
pub fn integrate_adaptive<F>(
    f: F,
    a: f64,
    b: f64,
    rule: &GaussLegendre,
    config: &QuadConfig,
) -> NumericsResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    if !(a.is_finite() && b.is_finite()) {
        return Err(NumericsError::InvalidArg {
            what: "integration limits must be finite",
        });
    }
    if a == b {
        return Ok(QuadResult::zero());
    }
    if a > b {
        let mut flipped = integrate_adaptive(f, b, a, rule, config)?;
        flipped.value = -flipped.value;
        return Ok(flipped);
    }

    let per_panel = rule.order();
    let mut result = QuadResult::zero();
    result.evaluations = per_panel;
    let mut stack = vec![(a, b, rule.integrate(&f, a, b), 0usize)];

    while let Some((lo, hi, whole, depth)) = stack.pop() {
        let mid = 0.5 * (lo + hi);
        let left = rule.integrate(&f, lo, mid);
        let right = rule.integrate(&f, mid, hi);
        result.evaluations += 2 * per_panel;

        let refined = left + right;
        let diff = (refined - whole).abs();
        let accept = diff <= config.abs_tol.max(config.rel_tol * refined.abs());
        if accept || depth + 1 >= config.max_depth || !diff.is_finite() {
            if !accept {
                result.converged = false;
            }
            result.value += refined;
            result.error_estimate += diff;
        } else {
            stack.push((mid, hi, right, depth + 1));
            stack.push((lo, mid, left, depth + 1));
        }
    }

    if !result.value.is_finite() {
        return Err(NumericsError::NonFinite {
            what: "quadrature sum",
            value: result.value,
        });
    }
    Ok(result)
}

/// [`integrate_adaptive`] split at the interior `breakpoints`.
///
/// Breakpoints outside `(a, b)` are ignored; use this for integrands with
/// known kinks or integrable singularities.
pub fn integrate_with_breakpoints<F>(
    f: F,
    a: f64,
    b: f64,
    breakpoints: &[f64],
    rule: &GaussLegendre,
    config: &QuadConfig,
) -> NumericsResult<QuadResult>
where
    F: Fn(f64) -> f64,
{
    if a > b {
        let mut flipped = integrate_with_breakpoints(f, b, a, breakpoints, rule, config)?;
        flipped.value = -flipped.value;
        return Ok(flipped);
    }

    let mut edges: Vec<f64> = breakpoints
        .iter()
        .copied()
        .filter(|x| x.is_finite() && *x > a && *x < b)
        .collect();
    edges.sort_by(f64::total_cmp);
    edges.dedup();
    edges.insert(0, a);
    edges.push(b);

    let mut total = QuadResult::zero();
    for pair in edges.windows(2) {
        total.absorb(integrate_adaptive(&f, pair[0], pair[1], rule, config)?);
    }
    Ok(total)
}
