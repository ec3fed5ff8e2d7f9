//! Errors from bounded-value construction and bound writes.
//!
//! Value writes never fail (they clamp), so every variant here describes a
//! bound ordering that has no safe clamped interpretation.

/// Errors from [`BoundedValue`](crate::BoundedValue) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// Construction was given `min > max`.
    InvertedRange,
    /// Construction was given a valid range but a value outside it.
    ValueOutOfRange,
    /// A new max would fall below the current min.
    MaxBelowMin,
    /// A new min would rise above the current max.
    MinAboveMax,
}

impl std::fmt::Display for BoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedRange => write!(f, "min is greater than max"),
            Self::ValueOutOfRange => write!(f, "value is outside [min, max]"),
            Self::MaxBelowMin => write!(f, "new max is below the current min"),
            Self::MinAboveMax => write!(f, "new min is above the current max"),
        }
    }
}

impl std::error::Error for BoundsError {}
