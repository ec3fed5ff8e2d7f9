#![forbid(unsafe_code)]

//! Core: clamped values that always stay inside their `[min, max]` range.
//!
//! # Role in the workspace
//! `bounded-core` is the invariant engine. It owns [`BoundedValue`], the
//! [`ReadBounded`] view trait shared with the reactive layer, and the
//! [`BoundsError`] type reported by construction and bound writes.
//!
//! # Primary responsibilities
//! - **BoundedValue**: validated construction, clamping value writes,
//!   conditional bound writes.
//! - **ReadBounded**: read-only access (`value`/`min`/`max`, `in_bounds`,
//!   `parts`) for any bounded container.
//! - **BoundsError**: explicit failure values instead of absent instances.
//!
//! # How it fits in the system
//! `bounded-reactive` composes a `BoundedValue` and adds change
//! notification on top. Nothing here allocates or knows about observers.

pub mod bounded;
pub mod error;
pub mod view;

mod order;

pub use bounded::BoundedValue;
pub use error::BoundsError;
pub use view::ReadBounded;
