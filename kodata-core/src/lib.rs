//! kodata Core
//!
//! This crate converts between plain JSON values and instances of
//! declaratively-described model types whose properties are wrapped in
//! reactive containers. It implements:
//!
//! - Reactive cells (scalar and sequence) with subscriber callbacks
//! - Model descriptors: named, ordered property schemas
//! - The bidirectional hydrate/dehydrate traversal engine
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `reactive`: the cell containers hydrated properties live in
//! - `schema`: descriptors, property metadata, and live instances
//! - `mapper`: hydration, dehydration, and arity classification
//! - `error`: the single shape-mismatch error kind
//!
//! # Example
//!
//! ```rust,ignore
//! use kodata_core::{from_json_value, to_json_value};
//! use kodata_core::{Kind, ModelDescriptor, PropertyMetadata};
//! use serde_json::json;
//!
//! let person = ModelDescriptor::builder("Person")
//!     .property("name", PropertyMetadata::one(Kind::Text))
//!     .property("emails", PropertyMetadata::many(Kind::Text))
//!     .build();
//!
//! let data = json!({
//!     "name": "Gareth",
//!     "emails": ["gaye@mozilla.com", "gareth@alumni.middlebury.edu"],
//! });
//!
//! // Hydrate: every property becomes a reactive cell.
//! let instance = from_json_value(&person, &data)?;
//! assert_eq!(instance.scalar("name").unwrap().get(), Some(json!("Gareth")));
//!
//! // Dehydrate: cells unwrap back to plain JSON.
//! assert_eq!(to_json_value(&person, &instance)?, data);
//! ```

pub mod error;
pub mod mapper;
pub mod reactive;
pub mod schema;

pub use error::ShapeError;
pub use mapper::{from_json_value, to_json_value, Arity, Shape};
pub use reactive::{ScalarCell, SequenceCell, Subscriber, SubscriberId};
pub use schema::{
    Hydrated, Kind, ModelDescriptor, ModelDescriptorBuilder, ModelInstance, PropertyMetadata,
    PropertySlot,
};
