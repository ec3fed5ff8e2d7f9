//! Behavior knobs for [`ReactiveBoundedValue`](crate::ReactiveBoundedValue).

/// What a write does once the value has been disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisposedWrites {
    /// Refuse with [`ReactiveError::Disposed`](crate::ReactiveError::Disposed)
    /// and leave state untouched.
    #[default]
    Reject,
    /// Mutate the underlying value without notifying anyone.
    Apply,
}

/// Configuration for a reactive bounded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactiveConfig {
    /// Policy for writes after `dispose()`.
    pub disposed_writes: DisposedWrites,
}

impl ReactiveConfig {
    /// Default configuration: post-disposal writes are rejected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the post-disposal write policy.
    #[must_use]
    pub fn with_disposed_writes(mut self, policy: DisposedWrites) -> Self {
        self.disposed_writes = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rejects() {
        assert_eq!(ReactiveConfig::new().disposed_writes, DisposedWrites::Reject);
    }

    #[test]
    fn builder_sets_policy() {
        let config = ReactiveConfig::new().with_disposed_writes(DisposedWrites::Apply);
        assert_eq!(config.disposed_writes, DisposedWrites::Apply);
    }
}
