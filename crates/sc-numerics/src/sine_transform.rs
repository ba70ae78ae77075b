//! Half-range sine transforms by summing half periods.
//!
//! `∫₀^∞ f(q) sin(q z) dq` is split at the zeros `kπ/z` of the sine. Each
//! half period is integrated adaptively; the alternating tail is then
//! accelerated by repeatedly averaging the last few partial sums.

use crate::error::{NumericsError, NumericsResult};
use crate::quadrature::{GaussLegendre, QuadConfig, integrate_adaptive};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SineTransformConfig {
    /// Half periods integrated explicitly
    pub half_periods: usize,
    /// Repeated-averaging passes over the trailing partial sums
    pub averaging_passes: usize,
    /// Absolute tolerance on the accelerated sum
    pub tolerance: f64,
}

impl Default for SineTransformConfig {
    fn default() -> Self {
        Self {
            half_periods: 64,
            averaging_passes: 12,
            tolerance: 1e-7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineTransformResult {
    pub value: f64,
    /// Change made by the last averaging pass
    pub error_estimate: f64,
    pub converged: bool,
}

/// `∫₀^∞ f(q) sin(q z) dq` for `z > 0`.
///
/// `f` must decay at large `q`; the averaging only accelerates tails that
/// alternate in sign from one half period to the next.
pub fn sine_transform<F>(
    f: F,
    z: f64,
    rule: &GaussLegendre,
    quad: &QuadConfig,
    config: &SineTransformConfig,
) -> NumericsResult<SineTransformResult>
where
    F: Fn(f64) -> f64,
{
    if !(z.is_finite() && z > 0.0) {
        return Err(NumericsError::InvalidArg {
            what: "sine transform needs a finite z > 0",
        });
    }
    if config.averaging_passes == 0 || config.half_periods <= config.averaging_passes {
        return Err(NumericsError::InvalidArg {
            what: "half_periods must exceed averaging_passes > 0",
        });
    }

    let h = std::f64::consts::PI / z;
    let integrand = |q: f64| f(q) * (q * z).sin();

    let mut partial = Vec::with_capacity(config.half_periods);
    let mut sum = 0.0;
    let mut inner_converged = true;
    for k in 0..config.half_periods {
        let piece = integrate_adaptive(&integrand, k as f64 * h, (k + 1) as f64 * h, rule, quad)?;
        inner_converged &= piece.converged;
        sum += piece.value;
        partial.push(sum);
    }

    let mut level = partial[partial.len() - (config.averaging_passes + 1)..].to_vec();
    let mut error_estimate = 0.0;
    for _ in 0..config.averaging_passes {
        if level.len() == 2 {
            error_estimate = 0.5 * (level[1] - level[0]).abs();
        }
        level = level.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
    }
    let value = level[0];

    if !value.is_finite() {
        return Err(NumericsError::NonFinite {
            what: "sine transform",
            value,
        });
    }
    Ok(SineTransformResult {
        value,
        error_estimate,
        converged: inner_converged && error_estimate <= config.tolerance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (GaussLegendre, QuadConfig, SineTransformConfig) {
        (
            GaussLegendre::new(20),
            QuadConfig::default(),
            SineTransformConfig::default(),
        )
    }

    #[test]
    fn lorentzian_transform() {
        // ∫ q / (q² + 1) sin(qz) dq = (π/2) e^{-z}
        let (rule, quad, config) = setup();
        for z in [0.5, 1.0, 3.0] {
            let result = sine_transform(|q| q / (q * q + 1.0), z, &rule, &quad, &config).unwrap();
            let exact = 0.5 * std::f64::consts::PI * (-z).exp();
            assert!((result.value - exact).abs() < 1e-6, "z = {z}: {}", result.value);
        }
    }

    #[test]
    fn exponential_transform() {
        // ∫ e^{-q} sin(qz) dq = z / (1 + z²)
        let (rule, quad, config) = setup();
        let z = 2.0;
        let result = sine_transform(|q: f64| (-q).exp(), z, &rule, &quad, &config).unwrap();
        assert!((result.value - 0.4).abs() < 1e-9);
        assert!(result.converged);
    }

    #[test]
    fn rejects_non_positive_z() {
        let (rule, quad, config) = setup();
        assert!(sine_transform(|q| q, 0.0, &rule, &quad, &config).is_err());
        assert!(sine_transform(|q| q, -1.0, &rule, &quad, &config).is_err());
    }

    #[test]
    fn rejects_too_few_half_periods() {
        let (rule, quad, _) = setup();
        let config = SineTransformConfig {
            half_periods: 4,
            averaging_passes: 4,
            ..SineTransformConfig::default()
        };
        assert!(sine_transform(|q: f64| (-q).exp(), 1.0, &rule, &quad, &config).is_err());
    }
}
