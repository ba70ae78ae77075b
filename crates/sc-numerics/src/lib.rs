//! Scalar numerical kernels for the superconductivity crates.
//!
//! Everything here is a pure function of its arguments and an explicit
//! configuration value: no global precision or cutoff state. Iterations are
//! capped and report whether they reached tolerance instead of failing.

pub mod error;
pub mod fixed_point;
pub mod quadrature;
pub mod roots;
pub mod sine_transform;

pub use error::{NumericsError, NumericsResult};
pub use fixed_point::{FixedPointConfig, FixedPointResult, relaxed_fixed_point};
pub use quadrature::{
    GaussLegendre, QuadConfig, QuadResult, integrate_adaptive, integrate_with_breakpoints,
};
pub use roots::{RootConfig, RootResult, newton_bisect};
pub use sine_transform::{SineTransformConfig, SineTransformResult, sine_transform};
