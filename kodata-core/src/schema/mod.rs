//! Model Schemas and Instances
//!
//! This module defines the two sides of the mapper's data model:
//!
//! - [`ModelDescriptor`]: the declarative schema for a model type, a named
//!   ordered map of property keys to [`PropertyMetadata`] (arity plus
//!   [`Kind`]). Descriptors are built by the host and only read here.
//! - [`ModelInstance`]: the live record produced by hydration, one
//!   [`PropertySlot`] per declared property, each holding reactive cells
//!   or nested instances.

mod descriptor;
mod instance;

pub use descriptor::{Kind, ModelDescriptor, ModelDescriptorBuilder, PropertyMetadata};
pub use instance::{Hydrated, ModelInstance, PropertySlot};
