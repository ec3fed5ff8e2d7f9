//! Payloads and emission modes for change notification.

use std::cmp::Ordering;

use bounded_core::ReadBounded;

/// Snapshot of `(value, min, max)` taken when a mutation emits.
///
/// Payload of the combined channel returned by `observe_any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyChangeEvent<T> {
    pub value: T,
    pub min: T,
    pub max: T,
}

impl<T> AnyChangeEvent<T> {
    /// Build a snapshot from its parts.
    #[must_use]
    pub const fn new(value: T, min: T, max: T) -> Self {
        Self { value, min, max }
    }

    /// Consume into `(value, min, max)`.
    #[must_use]
    pub fn into_parts(self) -> (T, T, T) {
        (self.value, self.min, self.max)
    }
}

impl<T: Ord> ReadBounded<T> for AnyChangeEvent<T> {
    fn value(&self) -> &T {
        &self.value
    }

    fn min(&self) -> &T {
        &self.min
    }

    fn max(&self) -> &T {
        &self.max
    }
}

/// When a mutation should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notify {
    /// Emit only if the stored field compares unequal to its old value.
    #[default]
    IfChanged,
    /// Emit even when nothing changed, e.g. to re-sync a fresh consumer.
    Force,
}

impl Notify {
    pub(crate) fn should_emit<T: Ord>(self, before: &T, after: &T) -> bool {
        self == Self::Force || before.cmp(after) != Ordering::Equal
    }
}

impl From<bool> for Notify {
    /// `true` maps to [`Notify::Force`].
    fn from(force: bool) -> Self {
        if force { Self::Force } else { Self::IfChanged }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn if_changed_uses_ordering() {
        assert!(!Notify::IfChanged.should_emit(&5, &5));
        assert!(Notify::IfChanged.should_emit(&5, &6));
    }

    #[test]
    fn force_always_emits() {
        assert!(Notify::Force.should_emit(&5, &5));
        assert_eq!(Notify::from(true), Notify::Force);
        assert_eq!(Notify::from(false), Notify::IfChanged);
        assert_eq!(Notify::default(), Notify::IfChanged);
    }

    #[test]
    fn snapshot_reads_as_bounded() {
        let ev = AnyChangeEvent::new(2, 2, 10);
        assert!(ev.in_bounds(&10));
        assert_eq!(ev.parts(), (&2, &2, &10));
        assert_eq!(ev.into_parts(), (2, 2, 10));
    }
}
