//! Error types for numerical routines.

use sc_core::error::ScError;
use thiserror::Error;

/// Errors raised before an iteration can even start.
///
/// Running out of iterations is not an error: it is reported through the
/// `converged` flag of the result types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericsError {
    #[error("Root not bracketed on [{lo}, {hi}]: f(lo) = {f_lo}, f(hi) = {f_hi}")]
    NotBracketed { lo: f64, hi: f64, f_lo: f64, f_hi: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-finite value in {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type NumericsResult<T> = Result<T, NumericsError>;

impl From<NumericsError> for ScError {
    fn from(e: NumericsError) -> Self {
        match e {
            NumericsError::NotBracketed { .. } => ScError::Invariant {
                what: "root not bracketed",
            },
            NumericsError::InvalidArg { what } => ScError::InvalidArg { what },
            NumericsError::NonFinite { what, value } => ScError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NumericsError::NotBracketed {
            lo: 0.0,
            hi: 1.0,
            f_lo: 1.0,
            f_hi: 2.0,
        };
        assert!(err.to_string().contains("not bracketed"));
    }

    #[test]
    fn error_to_core_error() {
        let core: ScError = NumericsError::InvalidArg { what: "order" }.into();
        assert_eq!(core, ScError::InvalidArg { what: "order" });
    }
}
