//! sc-core: stable foundation for the superconductivity crates.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + domain guards + clamping)
//! - special (domain-guarded exp/sqrt/cbrt, saturating tanh, Fermi factors)
//! - status (value + status pairs returned by every evaluation)
//! - constants (the few CODATA 2018 / mathematical constants the formulas use)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod special;
pub mod status;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ScError, ScResult};
pub use numeric::*;
pub use special::*;
pub use status::{Evaluation, Status};
pub use units::*;
