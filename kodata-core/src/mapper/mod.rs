//! The Hydrate/Dehydrate Engine
//!
//! This module is the core of the crate: two pure, stateless traversals
//! over a model descriptor.
//!
//! - [`from_json_value`] hydrates plain JSON into a reactive
//!   [`ModelInstance`](crate::schema::ModelInstance).
//! - [`to_json_value`] dehydrates an instance back into plain JSON.
//!
//! Both directions share the arity vocabulary and the single shape check
//! in [`classify`]. Nested model kinds recurse through the same two entry
//! points, so recursion depth follows schema nesting.

pub mod classify;

mod dehydrate;
mod hydrate;

pub use classify::{check, Arity, Shape};
pub use dehydrate::to_json_value;
pub use hydrate::from_json_value;
