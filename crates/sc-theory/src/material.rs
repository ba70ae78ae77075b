//! Material parameters shared by the kernels.

use crate::error::{TheoryError, TheoryResult};
use sc_core::constants::{BCS_GAP_RATIO, BOLTZMANN_MEV_PER_K};
use sc_core::numeric::ensure_positive;
use sc_core::units::{Energy, Length, Temperature, as_kelvin, as_mev, as_nm, mev};
use serde::{Deserialize, Serialize};

/// Parameters of a superconductor.
///
/// Lengths are in nm, the critical temperature in K and the gap in meV.
/// `mean_free_path = ∞` is the clean limit and is the serde default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParameters {
    /// Tc (K)
    pub critical_temperature: f64,
    /// BCS coherence length ξ₀ (nm)
    pub coherence_length: f64,
    /// Electron mean free path ℓ (nm)
    #[serde(default = "clean_limit")]
    pub mean_free_path: f64,
    /// London penetration depth λ_L(0) (nm)
    pub london_penetration_depth: f64,
    /// Δ(0) (meV); weak-coupling value when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_mev: Option<f64>,
    /// Dynes broadening Γ as a fraction of Δ(0)
    #[serde(default)]
    pub dynes_gamma: f64,
}

fn clean_limit() -> f64 {
    f64::INFINITY
}

impl MaterialParameters {
    pub fn new(
        critical_temperature: f64,
        coherence_length: f64,
        mean_free_path: f64,
        london_penetration_depth: f64,
    ) -> TheoryResult<Self> {
        let params = Self {
            critical_temperature,
            coherence_length,
            mean_free_path,
            london_penetration_depth,
            gap_mev: None,
            dynes_gamma: 0.0,
        };
        params.validate()?;
        Ok(params)
    }

    /// Clean-limit material (ℓ = ∞).
    pub fn clean(
        critical_temperature: f64,
        coherence_length: f64,
        london_penetration_depth: f64,
    ) -> TheoryResult<Self> {
        Self::new(
            critical_temperature,
            coherence_length,
            f64::INFINITY,
            london_penetration_depth,
        )
    }

    pub fn from_quantities(
        critical_temperature: Temperature,
        coherence_length: Length,
        mean_free_path: Length,
        london_penetration_depth: Length,
    ) -> TheoryResult<Self> {
        Self::new(
            as_kelvin(critical_temperature),
            as_nm(coherence_length),
            as_nm(mean_free_path),
            as_nm(london_penetration_depth),
        )
    }

    /// Override the weak-coupling Δ(0).
    pub fn with_gap_mev(mut self, gap_mev: f64) -> TheoryResult<Self> {
        self.gap_mev = Some(gap_mev);
        self.validate()?;
        Ok(self)
    }

    pub fn with_gap(self, gap: Energy) -> TheoryResult<Self> {
        self.with_gap_mev(as_mev(gap))
    }

    pub fn with_dynes_gamma(mut self, dynes_gamma: f64) -> TheoryResult<Self> {
        self.dynes_gamma = dynes_gamma;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> TheoryResult<()> {
        positive_finite(self.critical_temperature, "critical_temperature")?;
        positive_finite(self.coherence_length, "coherence_length")?;
        positive_finite(self.london_penetration_depth, "london_penetration_depth")?;
        // ∞ is the clean limit
        if self.mean_free_path.is_nan() || self.mean_free_path <= 0.0 {
            return Err(TheoryError::InvalidMaterial {
                what: "mean_free_path",
                value: self.mean_free_path,
            });
        }
        if let Some(gap) = self.gap_mev {
            positive_finite(gap, "gap_mev")?;
        }
        if !self.dynes_gamma.is_finite() || self.dynes_gamma < 0.0 {
            return Err(TheoryError::InvalidMaterial {
                what: "dynes_gamma",
                value: self.dynes_gamma,
            });
        }
        Ok(())
    }

    /// Δ(0) in meV.
    pub fn zero_temperature_gap(&self) -> f64 {
        self.gap_mev
            .unwrap_or(BCS_GAP_RATIO * BOLTZMANN_MEV_PER_K * self.critical_temperature)
    }

    pub fn gap(&self) -> Energy {
        mev(self.zero_temperature_gap())
    }

    /// k_B T / Δ(0) at reduced temperature `t`.
    pub fn reduced_thermal_energy(&self, t: f64) -> f64 {
        t * BOLTZMANN_MEV_PER_K * self.critical_temperature / self.zero_temperature_gap()
    }

    pub fn is_clean(&self) -> bool {
        self.mean_free_path.is_infinite()
    }

    pub fn from_yaml_str(content: &str) -> TheoryResult<Self> {
        let params: MaterialParameters = serde_yaml::from_str(content)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_str(content: &str) -> TheoryResult<Self> {
        let params: MaterialParameters = serde_json::from_str(content)?;
        params.validate()?;
        Ok(params)
    }
}

fn positive_finite(value: f64, what: &'static str) -> TheoryResult<()> {
    ensure_positive(value, what)
        .map(|_| ())
        .map_err(|_| TheoryError::InvalidMaterial { what, value })
}
