#![forbid(unsafe_code)]

//! A value clamped to a dynamically adjustable `[min, max]` range.
//!
//! # Invariants
//!
//! 1. `min <= value <= max` and `min <= max` after construction and after
//!    every mutation.
//! 2. `set_value` never fails: out-of-range writes store the nearest bound.
//! 3. `try_set_min` / `try_set_max` are all-or-nothing: on failure no field
//!    changes.
//! 4. Tightening a bound past the current value drags the value with it.
//!
//! # Failure Modes
//!
//! | Operation | Cause | Behavior |
//! |-----------|-------|----------|
//! | `new` | `min > max` | `Err(InvertedRange)` |
//! | `new` | value outside the range | `Err(ValueOutOfRange)` |
//! | `with_range` | `min > max` | `Err(InvertedRange)` |
//! | `try_set_max` | new max below min | `Err(MaxBelowMin)`, no change |
//! | `try_set_min` | new min above max | `Err(MinAboveMax)`, no change |

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::trace;

use crate::error::BoundsError;
use crate::order;
use crate::view::ReadBounded;

/// A value of a totally ordered type that always lies within its bounds.
///
/// ```
/// use bounded_core::{BoundedValue, ReadBounded};
///
/// let mut hp = BoundedValue::new(10, 0, 20).unwrap();
/// hp.set_value(99);
/// assert_eq!(*hp.value(), 20);
/// hp.try_set_max(5).unwrap();
/// assert_eq!(hp.parts(), (&5, &0, &5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedValue<T> {
    value: T,
    min: T,
    max: T,
}

impl<T: Ord + Clone> BoundedValue<T> {
    /// Create a bounded value from an explicit `(value, min, max)` triple.
    ///
    /// # Errors
    ///
    /// [`BoundsError::InvertedRange`] if `min > max`,
    /// [`BoundsError::ValueOutOfRange`] if `value` is not in `[min, max]`.
    pub fn new(value: T, min: T, max: T) -> Result<Self, BoundsError> {
        validate(&value, &min, &max)?;
        Ok(Self { value, min, max })
    }

    /// Create a bounded value spanning `[min, max]`, starting at `max`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::InvertedRange`] if `min > max`.
    pub fn with_range(min: T, max: T) -> Result<Self, BoundsError> {
        let value = max.clone();
        Self::new(value, min, max)
    }

    /// Copy the state of another bounded container.
    ///
    /// The source already upholds the range invariant, so nothing is
    /// re-validated.
    #[must_use]
    pub fn from_view(origin: &impl ReadBounded<T>) -> Self {
        let (value, min, max) = origin.parts();
        Self {
            value: value.clone(),
            min: min.clone(),
            max: max.clone(),
        }
    }

    /// Store `value`, clamped into `[min, max]`.
    pub fn set_value(&mut self, value: T) {
        self.value = if !order::is_at_least(&value, &self.min) {
            self.min.clone()
        } else if !order::is_at_most(&value, &self.max) {
            self.max.clone()
        } else {
            value
        };
    }

    /// Replace the upper bound. Clamps the value down if it now exceeds `max`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::MaxBelowMin`] if `max < min`; nothing changes.
    pub fn try_set_max(&mut self, max: T) -> Result<(), BoundsError> {
        if !order::is_at_least(&max, &self.min) {
            #[cfg(feature = "tracing")]
            trace!("bounded value: rejected max below min");
            return Err(BoundsError::MaxBelowMin);
        }
        self.max = max;
        if !order::is_at_most(&self.value, &self.max) {
            self.value = self.max.clone();
        }
        Ok(())
    }

    /// Replace the lower bound. Clamps the value up if it now falls below `min`.
    ///
    /// # Errors
    ///
    /// [`BoundsError::MinAboveMax`] if `min > max`; nothing changes.
    pub fn try_set_min(&mut self, min: T) -> Result<(), BoundsError> {
        if !order::is_at_most(&min, &self.max) {
            #[cfg(feature = "tracing")]
            trace!("bounded value: rejected min above max");
            return Err(BoundsError::MinAboveMax);
        }
        self.min = min;
        if !order::is_at_least(&self.value, &self.min) {
            self.value = self.min.clone();
        }
        Ok(())
    }

    /// Consume into `(value, min, max)`.
    #[must_use]
    pub fn into_parts(self) -> (T, T, T) {
        (self.value, self.min, self.max)
    }

    /// Consume and keep only the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Ord> ReadBounded<T> for BoundedValue<T> {
    #[inline]
    fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    fn min(&self) -> &T {
        &self.min
    }

    #[inline]
    fn max(&self) -> &T {
        &self.max
    }
}

impl<T: fmt::Display> fmt::Display for BoundedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value: {}, min: {}, max: {}",
            self.value, self.min, self.max
        )
    }
}

fn validate<T: Ord>(value: &T, min: &T, max: &T) -> Result<(), BoundsError> {
    if !order::is_ordered_range(min, max) {
        return Err(BoundsError::InvertedRange);
    }
    if !order::in_range(value, min, max) {
        return Err(BoundsError::ValueOutOfRange);
    }
    Ok(())
}
