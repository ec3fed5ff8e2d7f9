#![forbid(unsafe_code)]

//! Multicast notification channel with explicit completion.
//!
//! # Design
//!
//! [`Subject<T>`] keeps its subscriber list in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). Observers are owned by the [`Subscription`]
//! guard returned from `subscribe`; the subject itself only holds `Weak`
//! handles, so dropping the guard is all it takes to unsubscribe.
//!
//! # Invariants
//!
//! 1. Observers are notified in registration order.
//! 2. `complete()` is one-way: once closed, `next()` is a no-op and every new
//!    subscriber receives `on_completed` immediately.
//! 3. Each live observer sees `on_completed` at most once.
//! 4. No interior borrow is held while observer callbacks run.
//!
//! # Failure Modes
//!
//! - **Re-entrant subscribe from a callback**: allowed; the new observer is
//!   not part of the in-flight emission.
//! - **Subscriber leak**: guards kept forever keep their observers alive.
//!   Dead weak references are pruned lazily during `next()` and on every
//!   subscribe, so a channel that never emits does not grow under
//!   subscribe/drop churn.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Receiver of channel events.
pub trait Observer<T> {
    /// Called for every emitted item.
    fn on_next(&self, value: &T);

    /// Called once when the channel completes. Default does nothing.
    fn on_completed(&self) {}
}

/// Adapter so plain closures can subscribe.
pub(crate) struct FnObserver<F>(pub(crate) F);

impl<T, F: Fn(&T)> Observer<T> for FnObserver<F> {
    fn on_next(&self, value: &T) {
        (self.0)(value);
    }
}

pub(crate) type ObserverRc<T> = Rc<dyn Observer<T>>;
type ObserverWeak<T> = Weak<dyn Observer<T>>;

struct SubjectInner<T> {
    closed: bool,
    /// Dead entries are pruned on emit and on subscribe.
    subscribers: Vec<ObserverWeak<T>>,
}

/// A single-threaded multicast channel.
///
/// Cloning a `Subject` creates another handle to the **same** channel.
pub struct Subject<T> {
    inner: Rc<RefCell<SubjectInner<T>>>,
}

// Manual Clone: shares the same Rc.
impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Subject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Subject")
            .field("closed", &inner.closed)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T> Subject<T> {
    /// Create an open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SubjectInner {
                closed: false,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Deliver `value` to every live observer. No-op once closed.
    pub fn next(&self, value: &T) {
        let observers: Vec<ObserverRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return;
            }
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect()
        };
        for observer in &observers {
            observer.on_next(value);
        }
    }

    /// Close the channel and signal `on_completed` to live observers.
    ///
    /// Idempotent. The subscriber list is released.
    pub fn complete(&self) {
        let observers: Vec<ObserverRc<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.closed {
                return;
            }
            inner.closed = true;
            std::mem::take(&mut inner.subscribers)
                .into_iter()
                .filter_map(|w| w.upgrade())
                .collect()
        };
        for observer in &observers {
            observer.on_completed();
        }
    }

    /// Whether `complete()` has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.inner.borrow().closed
    }

    /// Registered subscribers, including dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl<T: 'static> Subject<T> {
    /// Subscribe a closure to future items.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.subscribe_observer(FnObserver(callback))
    }

    /// Subscribe an [`Observer`] to future items and completion.
    ///
    /// On a closed subject the observer completes immediately and the
    /// returned guard is empty.
    pub fn subscribe_observer(&self, observer: impl Observer<T> + 'static) -> Subscription {
        self.attach(Rc::new(observer))
    }

    pub(crate) fn attach(&self, observer: ObserverRc<T>) -> Subscription {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.closed {
                inner.subscribers.retain(|w| w.strong_count() > 0);
                inner.subscribers.push(Rc::downgrade(&observer));
                return Subscription {
                    guard: Some(Box::new(observer)),
                };
            }
        }
        observer.on_completed();
        Subscription::empty()
    }
}

/// RAII guard for one subscriber.
///
/// Dropping the guard (or calling [`unsubscribe`](Self::unsubscribe)) drops
/// the observer, so the subject's weak handle stops upgrading and delivery
/// to that observer ends. Other subscribers are unaffected.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    /// Type-erased strong reference keeping the observer `Rc` alive.
    guard: Option<Box<dyn Any>>,
}

impl Subscription {
    /// A guard attached to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self { guard: None }
    }

    /// Whether this guard holds no observer (for example because the
    /// channel had already completed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard.is_none()
    }

    /// Stop delivery to this subscriber.
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("empty", &self.is_empty())
            .finish()
    }
}

/// Read-only handle to a notification channel.
///
/// Either a live [`Subject`] or a stream that is already complete.
pub struct ChangeStream<T> {
    source: Option<Subject<T>>,
}

impl<T> Clone for ChangeStream<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T> fmt::Debug for ChangeStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeStream")
            .field("completed", &self.is_completed())
            .finish()
    }
}

impl<T> ChangeStream<T> {
    pub(crate) fn live(subject: Subject<T>) -> Self {
        Self {
            source: Some(subject),
        }
    }

    /// A stream that completes on subscription and never emits.
    #[must_use]
    pub fn completed() -> Self {
        Self { source: None }
    }

    /// Whether subscribing now would complete immediately.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.source.as_ref().is_none_or(Subject::is_closed)
    }
}

impl<T: 'static> ChangeStream<T> {
    /// Subscribe a closure to future items.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        self.subscribe_observer(FnObserver(callback))
    }

    /// Subscribe an [`Observer`] to future items and completion.
    pub fn subscribe_observer(&self, observer: impl Observer<T> + 'static) -> Subscription {
        match &self.source {
            Some(subject) => subject.subscribe_observer(observer),
            None => {
                observer.on_completed();
                Subscription::empty()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
