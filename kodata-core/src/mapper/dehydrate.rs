//! Dehydration
//!
//! Dehydration walks a model descriptor and a live instance together,
//! unwrapping every cell back into plain JSON. It is the inverse of
//! hydration: a conforming value survives the round trip unchanged.
//!
//! Only declared properties are emitted. The instance is never mutated;
//! cells are read through snapshots.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::trace;

use super::classify::{self, Arity, Shape};
use crate::error::ShapeError;
use crate::schema::{Hydrated, Kind, ModelDescriptor, ModelInstance, PropertyMetadata, PropertySlot};

/// Dehydrate an instance of the described model into a plain JSON object.
///
/// For every declared property:
///
/// - a key absent from the instance is skipped entirely;
/// - a present slot must match the declared arity (`Many` for `multiple`,
///   `One` otherwise), or the call fails with
///   [`ShapeError::ShapeMismatch`];
/// - `Many` slots read the sequence cell's current elements in order and
///   dehydrate each; `One` slots dehydrate their leaf directly.
///
/// An empty scalar cell (from an absent input key) dehydrates to JSON
/// null. Properties the instance carries but the descriptor does not
/// declare are not emitted.
pub fn to_json_value(
    descriptor: &Arc<ModelDescriptor>,
    instance: &ModelInstance,
) -> Result<Value, ShapeError> {
    trace!(
        model = descriptor.name(),
        properties = descriptor.property_count(),
        "dehydrating"
    );

    let mut result = Map::new();

    for (key, metadata) in descriptor.properties() {
        let Some(slot) = instance.get(key) else {
            continue;
        };

        classify::check(
            descriptor.name(),
            key,
            Arity::expected(metadata.multiple),
            Shape::of_slot(slot),
        )?;

        let value = match slot {
            PropertySlot::Many(items) => {
                let elements = items.items();
                let mut out = Vec::with_capacity(elements.len());
                for leaf in &elements {
                    out.push(dehydrate_leaf(metadata, leaf)?);
                }
                Value::Array(out)
            }
            PropertySlot::One(leaf) => dehydrate_leaf(metadata, leaf)?,
        };

        result.insert(key.to_string(), value);
    }

    Ok(Value::Object(result))
}

/// Dehydrate one leaf: scalar cells yield their current value (null when
/// empty), nested instances recurse.
///
/// A nested instance found under a primitive kind is dehydrated against
/// its own descriptor; wrong types pass through rather than fail, since
/// arity is the only validation the mapper performs.
fn dehydrate_leaf(metadata: &PropertyMetadata, leaf: &Hydrated) -> Result<Value, ShapeError> {
    match (&metadata.kind, leaf) {
        (Kind::Model(nested), Hydrated::Instance(instance)) => to_json_value(nested, instance),
        (_, Hydrated::Scalar(cell)) => Ok(cell.get().unwrap_or(Value::Null)),
        (_, Hydrated::Instance(instance)) => to_json_value(instance.descriptor(), instance),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
