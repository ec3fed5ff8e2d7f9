#![forbid(unsafe_code)]

//! Bounded value with per-field change notification and one-way disposal.
//!
//! # Design
//!
//! [`ReactiveBoundedValue<T>`] owns a [`BoundedValue<T>`] and four
//! [`Subject`]s. Every setter forwards to the owned value for clamping and
//! validation, compares the touched field before and after, and routes any
//! emission through a single dispatch point that fires the field's channel
//! first and the combined channel second.
//!
//! ```text
//! set_value / try_set_min / try_set_max
//!        │
//!        ▼
//!   BoundedValue (clamp, validate)
//!        │ changed or Notify::Force
//!        ▼
//!   emit(Change) ──► value | min | max channel ──► any channel
//! ```
//!
//! # Invariants
//!
//! 1. The owned value satisfies `min <= value <= max` after every call.
//! 2. A new value subscriber receives the current value before any later
//!    emission (replay-latest). Bound and combined channels do not replay.
//! 3. A failed bound write emits nothing.
//! 4. Once disposed, no channel emits again and every new subscription
//!    completes immediately. Channels are never re-created.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Construction | invalid triple | `Err(BoundsError)` |
//! | Bound write | ordering violated | `Err(ReactiveError::Bounds)`, no emission |
//! | Write after dispose | `DisposedWrites::Reject` | `Err(ReactiveError::Disposed)` |
//! | Write after dispose | `DisposedWrites::Apply` | mutates silently |
//! | Subscribe after dispose | any channel | immediate `on_completed` |

use std::fmt;
use std::rc::Rc;

use bounded_core::{BoundedValue, BoundsError, ReadBounded};
use tracing::{debug, trace, warn};

use crate::config::{DisposedWrites, ReactiveConfig};
use crate::error::ReactiveError;
use crate::event::{AnyChangeEvent, Notify};
use crate::subject::{ChangeStream, FnObserver, Observer, ObserverRc, Subject, Subscription};

/// Which field a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Value,
    Min,
    Max,
}

impl Change {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

struct Channels<T> {
    value: Subject<T>,
    min: Subject<T>,
    max: Subject<T>,
    any: Subject<AnyChangeEvent<T>>,
}

impl<T> Channels<T> {
    fn new() -> Self {
        Self {
            value: Subject::new(),
            min: Subject::new(),
            max: Subject::new(),
            any: Subject::new(),
        }
    }

    fn complete_all(&self) {
        self.value.complete();
        self.min.complete();
        self.max.complete();
        self.any.complete();
    }

    fn subscriber_count(&self) -> usize {
        self.value.subscriber_count()
            + self.min.subscriber_count()
            + self.max.subscriber_count()
            + self.any.subscriber_count()
    }
}

/// A bounded value that announces its changes.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use bounded_reactive::ReactiveBoundedValue;
///
/// let mut hp = ReactiveBoundedValue::new(7, 0, 10).unwrap();
/// let seen = Rc::new(Cell::new(0));
/// let seen_clone = Rc::clone(&seen);
/// let _sub = hp.subscribe_value(move |v| seen_clone.set(*v));
/// assert_eq!(seen.get(), 7); // replayed on subscribe
///
/// hp.set_value(42).unwrap();
/// assert_eq!(seen.get(), 10); // clamped
/// ```
pub struct ReactiveBoundedValue<T> {
    bounded: BoundedValue<T>,
    channels: Channels<T>,
    config: ReactiveConfig,
    disposed: bool,
}

impl<T: Ord + Clone + 'static> ReactiveBoundedValue<T> {
    /// Create from an explicit `(value, min, max)` triple.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedValue::new`].
    pub fn new(value: T, min: T, max: T) -> Result<Self, BoundsError> {
        BoundedValue::new(value, min, max).map(Self::from_bounded)
    }

    /// Create spanning `[min, max]`, starting at `max`.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedValue::with_range`].
    pub fn with_range(min: T, max: T) -> Result<Self, BoundsError> {
        BoundedValue::with_range(min, max).map(Self::from_bounded)
    }

    /// Wrap an existing bounded value. It is already valid, so this cannot fail.
    #[must_use]
    pub fn from_bounded(bounded: BoundedValue<T>) -> Self {
        Self {
            bounded,
            channels: Channels::new(),
            config: ReactiveConfig::default(),
            disposed: false,
        }
    }

    /// Copy the state of any bounded container.
    #[must_use]
    pub fn from_view(origin: &impl ReadBounded<T>) -> Self {
        Self::from_bounded(BoundedValue::from_view(origin))
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReactiveConfig) -> Self {
        self.config = config;
        self
    }

    /// Store `value` clamped into range, emitting only if it changed.
    ///
    /// # Errors
    ///
    /// [`ReactiveError::Disposed`] after disposal under the default config.
    pub fn set_value(&mut self, value: T) -> Result<(), ReactiveError> {
        self.set_value_with(value, Notify::IfChanged)
    }

    /// Store `value` clamped into range.
    ///
    /// Emits on the value channel, then the combined channel, if the stored
    /// value changed or `notify` is [`Notify::Force`].
    ///
    /// # Errors
    ///
    /// [`ReactiveError::Disposed`] after disposal under the default config.
    pub fn set_value_with(&mut self, value: T, notify: Notify) -> Result<(), ReactiveError> {
        if self.disposed {
            return self.write_after_dispose(move |b| {
                b.set_value(value);
                Ok(())
            });
        }
        let before = self.bounded.value().clone();
        self.bounded.set_value(value);
        if notify.should_emit(&before, self.bounded.value()) {
            self.emit(Change::Value);
        }
        Ok(())
    }

    /// Replace the upper bound, emitting only if it changed.
    ///
    /// # Errors
    ///
    /// [`ReactiveError::Bounds`] if `max < min`, [`ReactiveError::Disposed`]
    /// after disposal under the default config.
    pub fn try_set_max(&mut self, max: T) -> Result<(), ReactiveError> {
        self.try_set_max_with(max, Notify::IfChanged)
    }

    /// Replace the upper bound.
    ///
    /// On success emits on the max channel, then the combined channel, if the
    /// bound changed or `notify` is [`Notify::Force`]. A rejected bound emits
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`ReactiveError::Bounds`] if `max < min`, [`ReactiveError::Disposed`]
    /// after disposal under the default config.
    pub fn try_set_max_with(&mut self, max: T, notify: Notify) -> Result<(), ReactiveError> {
        if self.disposed {
            return self.write_after_dispose(move |b| b.try_set_max(max));
        }
        let before = self.bounded.max().clone();
        self.bounded.try_set_max(max)?;
        if notify.should_emit(&before, self.bounded.max()) {
            self.emit(Change::Max);
        }
        Ok(())
    }

    /// Replace the lower bound, emitting only if it changed.
    ///
    /// # Errors
    ///
    /// [`ReactiveError::Bounds`] if `min > max`, [`ReactiveError::Disposed`]
    /// after disposal under the default config.
    pub fn try_set_min(&mut self, min: T) -> Result<(), ReactiveError> {
        self.try_set_min_with(min, Notify::IfChanged)
    }

    /// Replace the lower bound. Mirror of [`try_set_max_with`](Self::try_set_max_with).
    ///
    /// # Errors
    ///
    /// [`ReactiveError::Bounds`] if `min > max`, [`ReactiveError::Disposed`]
    /// after disposal under the default config.
    pub fn try_set_min_with(&mut self, min: T, notify: Notify) -> Result<(), ReactiveError> {
        if self.disposed {
            return self.write_after_dispose(move |b| b.try_set_min(min));
        }
        let before = self.bounded.min().clone();
        self.bounded.try_set_min(min)?;
        if notify.should_emit(&before, self.bounded.min()) {
            self.emit(Change::Min);
        }
        Ok(())
    }

    /// Subscribe a closure to the value channel.
    ///
    /// The closure is called with the current value before this returns.
    pub fn subscribe_value(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.subscribe_value_observer(FnObserver(callback))
    }

    /// Subscribe an [`Observer`] to the value channel with replay-latest.
    ///
    /// After disposal the observer only receives `on_completed`.
    pub fn subscribe_value_observer(&self, observer: impl Observer<T> + 'static) -> Subscription {
        if self.disposed {
            observer.on_completed();
            return Subscription::empty();
        }
        let observer: ObserverRc<T> = Rc::new(observer);
        observer.on_next(self.bounded.value());
        self.channels.value.attach(observer)
    }

    /// Future changes of the lower bound. No replay.
    #[must_use]
    pub fn observe_min(&self) -> ChangeStream<T> {
        self.stream(&self.channels.min)
    }

    /// Future changes of the upper bound. No replay.
    #[must_use]
    pub fn observe_max(&self) -> ChangeStream<T> {
        self.stream(&self.channels.max)
    }

    /// Snapshots after any emitted change. No replay.
    #[must_use]
    pub fn observe_any(&self) -> ChangeStream<AnyChangeEvent<T>> {
        self.stream(&self.channels.any)
    }

    /// Current `(value, min, max)` as an owned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AnyChangeEvent<T> {
        let (value, min, max) = self.bounded.parts();
        AnyChangeEvent::new(value.clone(), min.clone(), max.clone())
    }

    fn stream<U>(&self, subject: &Subject<U>) -> ChangeStream<U> {
        if self.disposed {
            ChangeStream::completed()
        } else {
            ChangeStream::live(subject.clone())
        }
    }

    fn emit(&self, change: Change) {
        let snapshot = self.snapshot();
        trace!(channel = change.as_str(), "bounded value: emit");
        match change {
            Change::Value => self.channels.value.next(&snapshot.value),
            Change::Min => self.channels.min.next(&snapshot.min),
            Change::Max => self.channels.max.next(&snapshot.max),
        }
        self.channels.any.next(&snapshot);
    }

    fn write_after_dispose(
        &mut self,
        write: impl FnOnce(&mut BoundedValue<T>) -> Result<(), BoundsError>,
    ) -> Result<(), ReactiveError> {
        match self.config.disposed_writes {
            DisposedWrites::Reject => {
                warn!("bounded value: rejected write after dispose");
                Err(ReactiveError::Disposed)
            }
            DisposedWrites::Apply => Ok(write(&mut self.bounded)?),
        }
    }
}

impl<T> ReactiveBoundedValue<T> {
    /// Complete every channel and refuse further notification.
    ///
    /// Idempotent. Also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        debug!(
            subscribers = self.channels.subscriber_count(),
            "bounded value: disposed"
        );
        self.channels.complete_all();
    }

    /// Whether `dispose()` has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Read-only access to the underlying bounded value.
    #[must_use]
    pub fn bounded(&self) -> &BoundedValue<T> {
        &self.bounded
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ReactiveConfig {
        &self.config
    }

    /// Subscribers across all four channels, including dead ones not yet
    /// pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.channels.subscriber_count()
    }
}

impl<T> Drop for ReactiveBoundedValue<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T: Ord> ReadBounded<T> for ReactiveBoundedValue<T> {
    #[inline]
    fn value(&self) -> &T {
        self.bounded.value()
    }

    #[inline]
    fn min(&self) -> &T {
        self.bounded.min()
    }

    #[inline]
    fn max(&self) -> &T {
        self.bounded.max()
    }
}

impl<T: Ord + Clone + 'static> From<BoundedValue<T>> for ReactiveBoundedValue<T> {
    fn from(bounded: BoundedValue<T>) -> Self {
        Self::from_bounded(bounded)
    }
}

impl<T: fmt::Debug> fmt::Debug for ReactiveBoundedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveBoundedValue")
            .field("bounded", &self.bounded)
            .field("disposed", &self.disposed)
            .field("subscriber_count", &self.channels.subscriber_count())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for ReactiveBoundedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bounded, f)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
