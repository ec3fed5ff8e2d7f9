//! Comparison helpers over `Ord`.
//!
//! Every check is phrased through `Ord::cmp` so that `BoundedValue` never
//! relies on `PartialOrd` operators agreeing with `Ord`.

use std::cmp::Ordering;

#[inline]
pub(crate) fn is_at_most<T: Ord>(value: &T, max: &T) -> bool {
    value.cmp(max) != Ordering::Greater
}

#[inline]
pub(crate) fn is_at_least<T: Ord>(value: &T, min: &T) -> bool {
    value.cmp(min) != Ordering::Less
}

#[inline]
pub(crate) fn in_range<T: Ord>(value: &T, min: &T, max: &T) -> bool {
    is_at_least(value, min) && is_at_most(value, max)
}

/// Bounds are checked from both sides so an `Ord` impl that is not
/// antisymmetric cannot slip an inverted range through.
#[inline]
pub(crate) fn is_ordered_range<T: Ord>(min: &T, max: &T) -> bool {
    is_at_least(max, min) && is_at_most(min, max)
}
