use thiserror::Error;

pub type ScResult<T> = Result<T, ScError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Value out of domain for {what}: {value}")]
    OutOfDomain { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
