//! Numerical cutoffs, tolerances and iteration caps.
//!
//! `NumericsConfig` is the serializable form (YAML or JSON, every field
//! optional); `Numerics` is the validated runtime form that also owns the
//! prebuilt Gauss-Legendre rule.

use crate::error::{TheoryError, TheoryResult};
use sc_numerics::{
    FixedPointConfig, GaussLegendre, NumericsResult, QuadConfig, QuadResult, RootConfig,
    SineTransformConfig, integrate_adaptive, integrate_with_breakpoints,
};
use serde::{Deserialize, Serialize};

/// Gap-equation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    /// Reduced bandwidth Λ, in units of Δ(0)
    pub bandwidth_cutoff: f64,
    /// Thermal integrals stop where E / k_B T reaches this value
    pub fermi_cutoff: f64,
    /// Reduced temperatures within this distance of 1 give δ = 0
    pub critical_margin: f64,
    /// Root finder for δ(t)
    pub root: RootConfig,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            bandwidth_cutoff: 1e3,
            fermi_cutoff: 40.0,
            critical_margin: 1e-12,
            root: RootConfig::default(),
        }
    }
}

/// Matsubara-sum settings for the BCS kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatsubaraConfig {
    /// Fewest explicitly summed frequencies
    pub min_terms: usize,
    /// Most explicitly summed frequencies
    pub max_terms: usize,
    /// Reduced frequency at which the remainder switches to an integral
    pub tail_onset: f64,
}

impl Default for MatsubaraConfig {
    fn default() -> Self {
        Self {
            min_terms: 32,
            max_terms: 4096,
            tail_onset: 16.0,
        }
    }
}

/// Serializable numerics configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericsConfig {
    pub gap: GapConfig,
    pub quadrature: QuadConfig,
    pub matsubara: MatsubaraConfig,
    /// Self-consistent penetration depth iteration
    pub penetration: FixedPointConfig,
    pub sine_transform: SineTransformConfig,
}

impl NumericsConfig {
    pub fn validate(&self) -> TheoryResult<()> {
        let gap = &self.gap;
        positive_finite(gap.bandwidth_cutoff, "gap.bandwidth_cutoff")?;
        if gap.bandwidth_cutoff <= 1.0 {
            return Err(TheoryError::Config {
                what: "gap.bandwidth_cutoff must exceed 1",
            });
        }
        positive_finite(gap.fermi_cutoff, "gap.fermi_cutoff")?;
        if !(gap.critical_margin >= 0.0 && gap.critical_margin < 0.1) {
            return Err(TheoryError::Config {
                what: "gap.critical_margin must lie in [0, 0.1)",
            });
        }
        if gap.root.max_iterations == 0 {
            return Err(TheoryError::Config {
                what: "gap.root.max_iterations must be positive",
            });
        }
        non_negative_finite(gap.root.f_tol, "gap.root.f_tol")?;
        non_negative_finite(gap.root.x_tol, "gap.root.x_tol")?;
        non_negative_finite(gap.root.collapse_tol, "gap.root.collapse_tol")?;

        let quad = &self.quadrature;
        if quad.order == 0 || quad.max_depth == 0 {
            return Err(TheoryError::Config {
                what: "quadrature.order and quadrature.max_depth must be positive",
            });
        }
        non_negative_finite(quad.rel_tol, "quadrature.rel_tol")?;
        non_negative_finite(quad.abs_tol, "quadrature.abs_tol")?;
        if quad.rel_tol == 0.0 && quad.abs_tol == 0.0 {
            return Err(TheoryError::Config {
                what: "quadrature needs a non-zero tolerance",
            });
        }

        let matsubara = &self.matsubara;
        if matsubara.min_terms == 0 || matsubara.min_terms > matsubara.max_terms {
            return Err(TheoryError::Config {
                what: "matsubara terms must satisfy 0 < min_terms <= max_terms",
            });
        }
        positive_finite(matsubara.tail_onset, "matsubara.tail_onset")?;

        let penetration = &self.penetration;
        if penetration.max_iterations == 0 {
            return Err(TheoryError::Config {
                what: "penetration.max_iterations must be positive",
            });
        }
        if !(penetration.relaxation > 0.0 && penetration.relaxation <= 1.0) {
            return Err(TheoryError::Config {
                what: "penetration.relaxation must lie in (0, 1]",
            });
        }
        non_negative_finite(penetration.rel_tol, "penetration.rel_tol")?;

        let sine = &self.sine_transform;
        if sine.averaging_passes == 0 || sine.half_periods <= sine.averaging_passes {
            return Err(TheoryError::Config {
                what: "sine_transform needs half_periods > averaging_passes > 0",
            });
        }
        non_negative_finite(sine.tolerance, "sine_transform.tolerance")?;

        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> TheoryResult<Self> {
        let config: NumericsConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> TheoryResult<String> {
        self.validate()?;
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn from_json_str(content: &str) -> TheoryResult<Self> {
        let config: NumericsConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> TheoryResult<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn positive_finite(value: f64, what: &'static str) -> TheoryResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(TheoryError::Config { what });
    }
    Ok(())
}

fn non_negative_finite(value: f64, what: &'static str) -> TheoryResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TheoryError::Config { what });
    }
    Ok(())
}

/// Validated numerics with the quadrature rule already built.
#[derive(Debug, Clone)]
pub struct Numerics {
    config: NumericsConfig,
    rule: GaussLegendre,
}

impl Numerics {
    pub fn new(config: NumericsConfig) -> TheoryResult<Self> {
        config.validate()?;
        Ok(Self {
            rule: GaussLegendre::new(config.quadrature.order),
            config,
        })
    }

    pub fn config(&self) -> &NumericsConfig {
        &self.config
    }

    pub fn rule(&self) -> &GaussLegendre {
        &self.rule
    }

    /// Adaptive integral of `f` over `[a, b]` with the configured rule.
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> NumericsResult<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        integrate_adaptive(f, a, b, &self.rule, &self.config.quadrature)
    }

    /// As [`Numerics::integrate`], split at `breakpoints`.
    pub fn integrate_split<F>(
        &self,
        f: F,
        a: f64,
        b: f64,
        breakpoints: &[f64],
    ) -> NumericsResult<QuadResult>
    where
        F: Fn(f64) -> f64,
    {
        integrate_with_breakpoints(f, a, b, breakpoints, &self.rule, &self.config.quadrature)
    }
}

impl Default for Numerics {
    fn default() -> Self {
        let config = NumericsConfig::default();
        Self {
            rule: GaussLegendre::new(config.quadrature.order),
            config,
        }
    }
}
