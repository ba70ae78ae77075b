//! London's local electrodynamics: K(q) = λ(t)⁻² for every q.

use crate::bcs;
use crate::config::Numerics;
use crate::kernel::{self, ElectrodynamicKernel};
use crate::material::MaterialParameters;
use crate::phenomenology;
use sc_core::{Evaluation, Status};
use serde::{Deserialize, Serialize};

/// Temperature dependence of λ(t) / λ_L(0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum TemperatureLaw {
    /// 1 / sqrt(1 - tⁿ); n = 4 is the two-fluid model
    PowerLaw { exponent: f64 },
    /// 1 / sqrt(δ(t)) with the solved BCS gap
    BcsGap,
}

impl Default for TemperatureLaw {
    fn default() -> Self {
        TemperatureLaw::PowerLaw { exponent: 4.0 }
    }
}

impl TemperatureLaw {
    /// λ(t) / λ_L(0).
    pub fn reduced_depth(&self, t: f64, numerics: &Numerics) -> Evaluation {
        match *self {
            TemperatureLaw::PowerLaw { exponent } => {
                phenomenology::reduced_penetration_depth(t, exponent)
            }
            TemperatureLaw::BcsGap => {
                let gap = bcs::reduced_gap(t, numerics);
                if gap.value <= 0.0 {
                    Evaluation::singular()
                } else {
                    Evaluation::new(1.0 / gap.value.sqrt(), gap.status)
                }
            }
        }
    }
}

/// London kernel at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LondonKernel {
    inverse_square_depth: f64,
    status: Status,
}

impl LondonKernel {
    pub fn new(
        t: f64,
        params: &MaterialParameters,
        law: TemperatureLaw,
        numerics: &Numerics,
    ) -> Self {
        let depth = law
            .reduced_depth(t, numerics)
            .map(|r| r * params.london_penetration_depth);
        let inverse_square_depth = if depth.value.is_finite() {
            1.0 / (depth.value * depth.value)
        } else {
            0.0
        };
        Self {
            inverse_square_depth,
            status: depth.status,
        }
    }
}

impl ElectrodynamicKernel for LondonKernel {
    fn kernel(&self, _q: f64) -> f64 {
        self.inverse_square_depth
    }

    fn reduced_kernel(&self, _q: f64) -> f64 {
        1.0
    }

    fn status(&self) -> Status {
        self.status
    }

    fn is_local(&self) -> bool {
        true
    }
}

/// K(q) = λ(t)⁻² (nm⁻²); 0 at and above Tc.
pub fn kernel(
    q: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = LondonKernel::new(t, params, law, numerics);
    Evaluation::new(k.kernel(q), k.status())
}

/// K(q) / K(0), identically 1.
pub fn reduced_kernel(_q: f64) -> Evaluation {
    Evaluation::converged(1.0)
}

/// λ(t) in nm; λ_L(0) exactly at t = 0.
pub fn penetration_depth(
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    law.reduced_depth(t, numerics)
        .map(|r| r * params.london_penetration_depth)
}

/// λ(t) / λ(0).
pub fn reduced_penetration_depth(t: f64, law: TemperatureLaw, numerics: &Numerics) -> Evaluation {
    law.reduced_depth(t, numerics)
}

/// B(z) / B(0) = exp(-z / λ(t)).
pub fn reduced_field_penetration(
    z: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    let k = LondonKernel::new(t, params, law, numerics);
    kernel::reduced_field_penetration(&k, z, numerics)
}

/// B(z) in the units of `applied_field`.
pub fn field_penetration(
    z: f64,
    applied_field: f64,
    t: f64,
    law: TemperatureLaw,
    params: &MaterialParameters,
    numerics: &Numerics,
) -> Evaluation {
    reduced_field_penetration(z, t, law, params, numerics).map(|b| applied_field * b)
}
