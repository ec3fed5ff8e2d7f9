//! Read-only view over anything holding a value and its bounds.

use crate::order;

/// Read access to a bounded value.
///
/// Implemented by [`BoundedValue`](crate::BoundedValue) and by the reactive
/// wrapper, so callers that only read can accept either.
pub trait ReadBounded<T: Ord> {
    /// Current value.
    fn value(&self) -> &T;

    /// Current lower bound.
    fn min(&self) -> &T;

    /// Current upper bound.
    fn max(&self) -> &T;

    /// Whether `value` lies within `[min, max]`. Does not mutate.
    fn in_bounds(&self, value: &T) -> bool {
        order::in_range(value, self.min(), self.max())
    }

    /// Borrow `(value, min, max)` in one call.
    fn parts(&self) -> (&T, &T, &T) {
        (self.value(), self.min(), self.max())
    }
}
