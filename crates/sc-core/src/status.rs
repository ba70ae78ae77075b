//! Value + status pairs.
//!
//! Evaluations never unwind: a degraded result is still returned, tagged
//! with how far it can be trusted.

use crate::numeric::Real;
use core::fmt;

/// Outcome of a single evaluation, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Exact, closed-form, or converged to tolerance.
    #[default]
    Converged,
    /// An input was outside its domain and was moved to the nearest boundary.
    Clamped,
    /// An iteration hit its cap; the value is the best estimate available.
    NotConverged,
    /// The quantity diverges here; the value is `+inf`.
    Singular,
}

impl Status {
    /// Combine two statuses, keeping the more severe one.
    #[inline]
    pub fn worst(self, other: Status) -> Status {
        self.max(other)
    }

    /// Whether the value can be used as a precise number.
    pub fn is_reliable(self) -> bool {
        matches!(self, Status::Converged | Status::Clamped)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Converged => "converged",
            Status::Clamped => "clamped",
            Status::NotConverged => "not-converged",
            Status::Singular => "singular",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed value together with its [`Status`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub value: Real,
    pub status: Status,
}

impl Evaluation {
    pub fn new(value: Real, status: Status) -> Self {
        Self { value, status }
    }

    pub fn converged(value: Real) -> Self {
        Self::new(value, Status::Converged)
    }

    pub fn clamped(value: Real) -> Self {
        Self::new(value, Status::Clamped)
    }

    pub fn not_converged(value: Real) -> Self {
        Self::new(value, Status::NotConverged)
    }

    /// Divergent result: `+inf` tagged [`Status::Singular`].
    pub fn singular() -> Self {
        Self::new(Real::INFINITY, Status::Singular)
    }

    /// Degrade the status to at least `status`.
    #[must_use]
    pub fn with_status(self, status: Status) -> Self {
        Self::new(self.value, self.status.worst(status))
    }

    /// Transform the value, keeping the status.
    #[must_use]
    pub fn map(self, f: impl FnOnce(Real) -> Real) -> Self {
        Self::new(f(self.value), self.status)
    }

    pub fn is_reliable(&self) -> bool {
        self.status.is_reliable()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.status)
    }
}
