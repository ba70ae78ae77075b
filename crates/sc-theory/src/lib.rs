//! sc-theory: BCS superconductivity formulas.
//!
//! Reduced temperatures `t = T / Tc`, lengths in nanometres, wavevectors in
//! nm⁻¹, energies in meV. Every evaluation returns an [`Evaluation`]: a value
//! plus a [`Status`] saying whether it was clamped, singular or unconverged.
//! Numerical cutoffs and tolerances are carried by [`Numerics`], passed
//! explicitly to every call that needs them.

pub mod bcs;
pub mod config;
pub mod dynes;
pub mod error;
pub mod gap_equation;
pub mod gc;
pub mod kernel;
pub mod london;
pub mod material;
pub mod phenomenology;
pub mod pippard;
pub mod sweep;

pub use config::{GapConfig, MatsubaraConfig, Numerics, NumericsConfig};
pub use error::{TheoryError, TheoryResult};
pub use kernel::ElectrodynamicKernel;
pub use london::TemperatureLaw;
pub use material::MaterialParameters;
pub use phenomenology::CriticalTemperatureModel;
pub use sc_core::{Evaluation, Status};
