//! Hydration
//!
//! Hydration walks a model descriptor and a raw JSON value together,
//! producing a fresh [`ModelInstance`] whose primitive leaves are wrapped
//! in scalar cells, whose `multiple` properties are sequence cells, and
//! whose nested models are hydrated recursively.
//!
//! The input is never mutated; every leaf value is cloned into its cell.

use std::sync::Arc;

use serde_json::Value;
use tracing::trace;

use super::classify::{self, Arity, Shape};
use crate::error::ShapeError;
use crate::reactive::{ScalarCell, SequenceCell};
use crate::schema::{Hydrated, Kind, ModelDescriptor, ModelInstance, PropertyMetadata, PropertySlot};

/// Hydrate a JSON value into a fresh instance of the described model.
///
/// For every declared property:
///
/// - an absent key hydrates to an empty cell (sequence cell when the
///   property is `multiple`, scalar cell otherwise);
/// - a present key must match the declared arity (array for `multiple`,
///   non-array otherwise), or the call fails with
///   [`ShapeError::ShapeMismatch`];
/// - `multiple` properties hydrate each element in order into a sequence
///   cell; single properties hydrate the value directly.
///
/// Keys in `data` that the descriptor does not declare are ignored. A
/// non-object `data` is treated as an object with no keys.
///
/// # Example
///
/// ```rust,ignore
/// let person = from_json_value(&person_descriptor, &json!({
///     "name": "Gareth",
///     "emails": ["gaye@mozilla.com", "gareth@alumni.middlebury.edu"],
/// }))?;
///
/// assert_eq!(person.scalar("name").unwrap().get(), Some(json!("Gareth")));
/// assert_eq!(person.sequence("emails").unwrap().len(), 2);
/// assert!(person.is_instance_of(&person_descriptor));
/// ```
pub fn from_json_value(
    descriptor: &Arc<ModelDescriptor>,
    data: &Value,
) -> Result<ModelInstance, ShapeError> {
    trace!(
        model = descriptor.name(),
        properties = descriptor.property_count(),
        "hydrating"
    );

    let fields = data.as_object();
    let mut instance = ModelInstance::new(Arc::clone(descriptor));

    for (key, metadata) in descriptor.properties() {
        let slot = match fields.and_then(|f| f.get(key)) {
            None => empty_slot(metadata),
            Some(value) => {
                classify::check(
                    descriptor.name(),
                    key,
                    Arity::expected(metadata.multiple),
                    Shape::of_json(value),
                )?;

                if let (true, Value::Array(elements)) = (metadata.multiple, value) {
                    let items = SequenceCell::new();
                    for element in elements {
                        items.push(hydrate_leaf(metadata, element)?);
                    }
                    PropertySlot::Many(items)
                } else {
                    PropertySlot::One(hydrate_leaf(metadata, value)?)
                }
            }
        };
        instance.set(key, slot);
    }

    Ok(instance)
}

/// Hydrate one leaf value according to the property's kind: primitives
/// are cloned into a new scalar cell, model kinds recurse.
fn hydrate_leaf(metadata: &PropertyMetadata, value: &Value) -> Result<Hydrated, ShapeError> {
    match &metadata.kind {
        Kind::Model(nested) => Ok(Hydrated::Instance(from_json_value(nested, value)?)),
        Kind::Boolean | Kind::Number | Kind::Text => {
            Ok(Hydrated::Scalar(ScalarCell::new(value.clone())))
        }
    }
}

/// The slot an absent key hydrates to.
fn empty_slot(metadata: &PropertyMetadata) -> PropertySlot {
    if metadata.multiple {
        PropertySlot::Many(SequenceCell::new())
    } else {
        PropertySlot::One(Hydrated::Scalar(ScalarCell::empty()))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
