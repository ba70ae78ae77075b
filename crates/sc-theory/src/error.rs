//! Theory-layer errors.
//!
//! Only construction can fail: bad material parameters or an unusable
//! numerics configuration. Evaluations report trouble through
//! [`sc_core::Status`] instead.

use sc_core::ScError;
use sc_numerics::NumericsError;
use thiserror::Error;

pub type TheoryResult<T> = Result<T, TheoryError>;

#[derive(Error, Debug)]
pub enum TheoryError {
    #[error("Invalid material parameter {what}: {value}")]
    InvalidMaterial { what: &'static str, value: f64 },

    #[error("Invalid numerics configuration: {what}")]
    Config { what: &'static str },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Numerics(#[from] NumericsError),

    #[error(transparent)]
    Core(#[from] ScError),
}

impl From<TheoryError> for ScError {
    fn from(err: TheoryError) -> Self {
        match err {
            TheoryError::InvalidMaterial { what, value } => ScError::OutOfDomain { what, value },
            TheoryError::Config { what } => ScError::InvalidArg { what },
            TheoryError::Yaml(_) | TheoryError::Json(_) => ScError::InvalidArg {
                what: "malformed configuration document",
            },
            TheoryError::Numerics(e) => e.into(),
            TheoryError::Core(e) => e,
        }
    }
}
