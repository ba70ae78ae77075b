//! Closed-form surrogates for the gap, penetration depth and Tc(H).

use sc_core::numeric::clamp_unit;
use sc_core::special::safe_sqrt;
use sc_core::units::{MagneticField, Temperature, as_kelvin, as_tesla};
use sc_core::{Evaluation, Status};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Default exponent of the parabolic Tc(H) law.
pub const CRITICAL_FIELD_EXPONENT: f64 = 0.5;

/// λ(t) / λ(0) = 1 / sqrt(1 - tⁿ).
///
/// Diverges (`Singular`) at and above Tc; negative `t` is clamped to 0.
pub fn reduced_penetration_depth(t: f64, exponent: f64) -> Evaluation {
    if t.is_nan() || t < 0.0 {
        return Evaluation::clamped(1.0);
    }
    if t == 0.0 {
        return Evaluation::converged(1.0);
    }
    if t >= 1.0 {
        return Evaluation::singular();
    }
    let superfluid = 1.0 - t.powf(exponent);
    if superfluid <= 0.0 {
        return Evaluation::singular();
    }
    Evaluation::converged(1.0 / superfluid.sqrt())
}

/// λ(t) in the units of `lambda_0`.
pub fn penetration_depth(t: f64, exponent: f64, lambda_0: f64) -> Evaluation {
    reduced_penetration_depth(t, exponent).map(|r| lambda_0 * r)
}

/// Halbritter's approximation δ(t) ≈ cos(π t² / 2).
pub fn reduced_gap(t: f64) -> Evaluation {
    let (t, clamped) = clamp_unit(t);
    let status = if clamped { Status::Clamped } else { Status::Converged };
    let value = if t >= 1.0 {
        0.0
    } else {
        (FRAC_PI_2 * t * t).cos()
    };
    Evaluation::new(value, status)
}

/// Tc(H) = Tc₀ (1 - H/Hc)^exponent.
///
/// Negative fields are treated as zero field; fields above `critical_field`
/// suppress superconductivity entirely. Both report `Clamped`.
pub fn critical_temperature(
    applied_field: f64,
    critical_temperature_0: f64,
    critical_field: f64,
    exponent: f64,
) -> Evaluation {
    if applied_field < 0.0 {
        return Evaluation::clamped(critical_temperature_0);
    }
    if applied_field > critical_field {
        return Evaluation::clamped(0.0);
    }
    let h = applied_field / critical_field;
    Evaluation::converged(critical_temperature_0 * (1.0 - h).powf(exponent))
}

/// Tc(H) from inverting Hc2(T)/Hc2(0) = sqrt((1 - t²)/(1 + t²))
/// (M. Tinkham, Phys. Rev. 129, 2413 (1963)).
pub fn critical_temperature_ii(
    applied_field: f64,
    critical_temperature_0: f64,
    upper_critical_field: f64,
) -> Evaluation {
    if applied_field < 0.0 {
        return Evaluation::clamped(critical_temperature_0);
    }
    if applied_field > upper_critical_field {
        return Evaluation::clamped(0.0);
    }
    let h2 = (applied_field / upper_critical_field).powi(2);
    Evaluation::converged(critical_temperature_0 * safe_sqrt((1.0 - h2) / (1.0 + h2)))
}

/// Selectable Tc(H) law. Neither form is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CriticalTemperatureModel {
    /// [`critical_temperature`]
    PowerLaw { exponent: f64 },
    /// [`critical_temperature_ii`]
    Tinkham,
}

impl CriticalTemperatureModel {
    pub fn critical_temperature(
        &self,
        applied_field: f64,
        critical_temperature_0: f64,
        critical_field: f64,
    ) -> Evaluation {
        match *self {
            CriticalTemperatureModel::PowerLaw { exponent } => critical_temperature(
                applied_field,
                critical_temperature_0,
                critical_field,
                exponent,
            ),
            CriticalTemperatureModel::Tinkham => {
                critical_temperature_ii(applied_field, critical_temperature_0, critical_field)
            }
        }
    }

    /// [`Self::critical_temperature`] on typed quantities; the result is in K.
    pub fn critical_temperature_of(
        &self,
        applied_field: MagneticField,
        critical_temperature_0: Temperature,
        critical_field: MagneticField,
    ) -> Evaluation {
        self.critical_temperature(
            as_tesla(applied_field),
            as_kelvin(critical_temperature_0),
            as_tesla(critical_field),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fluid_depth() {
        for i in 0..20 {
            let t = i as f64 / 20.0;
            let r = reduced_penetration_depth(t, 4.0);
            assert_eq!(r.status, Status::Converged);
            assert!((r.value - 1.0 / (1.0 - t.powi(4)).sqrt()).abs() < 1e-14);
        }
        assert_eq!(reduced_penetration_depth(1.0, 4.0).status, Status::Singular);
        assert_eq!(reduced_penetration_depth(-0.5, 4.0), Evaluation::clamped(1.0));
        assert_eq!(penetration_depth(0.0, 4.0, 39.0).value, 39.0);
    }

    #[test]
    fn halbritter_gap_limits() {
        assert_eq!(reduced_gap(0.0).value, 1.0);
        assert_eq!(reduced_gap(1.0).value, 0.0);
        assert_eq!(reduced_gap(1.5), Evaluation::clamped(0.0));
        assert!((reduced_gap(0.5).value - (std::f64::consts::PI / 8.0).cos()).abs() < 1e-15);
    }

    #[test]
    fn critical_temperature_variants() {
        let tc0 = 9.25;
        assert_eq!(critical_temperature(0.0, tc0, 0.2, CRITICAL_FIELD_EXPONENT).value, tc0);
        let half = critical_temperature(0.15, tc0, 0.2, CRITICAL_FIELD_EXPONENT).value;
        assert!((half - tc0 * 0.5).abs() < 1e-14);
        assert_eq!(critical_temperature(-1.0, tc0, 0.2, 0.5), Evaluation::clamped(tc0));
        assert_eq!(critical_temperature(0.3, tc0, 0.2, 0.5), Evaluation::clamped(0.0));

        let h = 0.5_f64;
        let expected = tc0 * ((1.0 - h * h) / (1.0 + h * h)).sqrt();
        assert!((critical_temperature_ii(0.1, tc0, 0.2).value - expected).abs() < 1e-14);
        assert_eq!(critical_temperature_ii(0.2, tc0, 0.2).value, 0.0);
        assert_eq!(critical_temperature_ii(0.25, tc0, 0.2), Evaluation::clamped(0.0));
    }

    #[test]
    fn models_dispatch_independently() {
        let power = CriticalTemperatureModel::PowerLaw { exponent: 1.0 };
        let tinkham = CriticalTemperatureModel::Tinkham;
        assert!((power.critical_temperature(0.1, 9.0, 0.2).value - 4.5).abs() < 1e-14);
        assert_eq!(
            tinkham.critical_temperature(0.1, 9.0, 0.2),
            critical_temperature_ii(0.1, 9.0, 0.2)
        );
    }
}
