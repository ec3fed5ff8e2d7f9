#![forbid(unsafe_code)]

//! Reactive bounded values.
//!
//! This crate layers change notification over `bounded-core`:
//!
//! - [`ReactiveBoundedValue`]: a [`BoundedValue`] with value, min, max and
//!   combined change channels plus a one-way `dispose()`.
//! - [`Subject`] / [`Observer`]: the single-threaded multicast channel the
//!   notifications travel on.
//! - [`Subscription`]: RAII guard that unsubscribes on drop.
//! - [`ChangeStream`]: read-only handle to a channel, or an already
//!   completed stream after disposal.
//!
//! # Architecture
//!
//! Channels use `Rc<RefCell<..>>` for single-threaded shared ownership, so
//! none of these types are `Send`. Observers are stored as `Weak` handles
//! and pruned lazily during notification and subscription.
//!
//! # Invariants
//!
//! 1. Emission order is the touched field's channel, then the combined one.
//! 2. Writes that leave the field unchanged emit nothing unless forced.
//! 3. Value subscribers receive the current value on subscribe.
//! 4. After `dispose()` no channel emits and new subscribers complete
//!    immediately.

pub mod config;
pub mod error;
pub mod event;
pub mod reactive_bounded;
pub mod subject;

pub use bounded_core::{BoundedValue, BoundsError, ReadBounded};
pub use config::{DisposedWrites, ReactiveConfig};
pub use error::ReactiveError;
pub use event::{AnyChangeEvent, Notify};
pub use reactive_bounded::ReactiveBoundedValue;
pub use subject::{ChangeStream, Observer, Subject, Subscription};
