//! Reactive Primitives
//!
//! This module implements the reactive containers that hydrated model
//! properties live in: scalar cells and sequence cells.
//!
//! # Concepts
//!
//! ## Scalar Cells
//!
//! A [`ScalarCell`] holds at most one value. Every primitive leaf of a
//! hydrated model is wrapped in one. Reading returns the current value;
//! writing replaces it and notifies subscribers.
//!
//! ## Sequence Cells
//!
//! A [`SequenceCell`] holds an ordered, append-only-growable sequence of
//! values. Every `multiple` property of a hydrated model is backed by one.
//! Reading returns a snapshot of the current elements in push order.
//!
//! ## Subscribers
//!
//! Both cell kinds accept change callbacks keyed by [`SubscriberId`], so a
//! host binding layer can observe writes. The mapper itself never
//! subscribes to anything; it only constructs and reads cells.
//!
//! # Implementation Notes
//!
//! Cells are cheap handles: cloning a cell shares the underlying storage
//! rather than copying it, the same way a signal handle would in a
//! fine-grained reactive runtime.

mod scalar;
mod sequence;
mod subscriber;

pub use scalar::ScalarCell;
pub use sequence::SequenceCell;
pub use subscriber::{Subscriber, SubscriberId};
