//! Temperature and wavevector sweeps.
//!
//! Each point is independent, so sweeps are evaluated in parallel with
//! rayon. Results come back in input order.

use rayon::prelude::*;

/// `n` evenly spaced points from `start` to `end` inclusive.
///
/// `n = 1` yields `[start]`; `n = 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Evaluate `f` at every point of `points` in parallel.
pub fn par_evaluate<T, F>(points: &[f64], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(f64) -> T + Sync + Send,
{
    tracing::debug!(points = points.len(), "parallel sweep");
    points.par_iter().map(|&x| f(x)).collect()
}
