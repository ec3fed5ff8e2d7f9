//! Errors from reactive bounded-value writes.

use bounded_core::BoundsError;

/// Errors from [`ReactiveBoundedValue`](crate::ReactiveBoundedValue) writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactiveError {
    /// The underlying bound write was rejected.
    Bounds(BoundsError),
    /// The value was disposed and the config rejects further writes.
    Disposed,
}

impl std::fmt::Display for ReactiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bounds(err) => write!(f, "bounds rejected: {err}"),
            Self::Disposed => write!(f, "value has been disposed"),
        }
    }
}

impl std::error::Error for ReactiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bounds(err) => Some(err),
            Self::Disposed => None,
        }
    }
}

impl From<BoundsError> for ReactiveError {
    fn from(err: BoundsError) -> Self {
        Self::Bounds(err)
    }
}
