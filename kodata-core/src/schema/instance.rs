//! Model Instances
//!
//! A model instance is the live, reactive counterpart of one JSON object:
//! an ordered record with one slot per declared property, each slot
//! holding a scalar cell, a sequence cell, or a nested instance. Instances
//! remember the descriptor that produced them, so a caller can check what
//! model a value belongs to.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::reactive::{ScalarCell, SequenceCell};
use crate::schema::ModelDescriptor;

/// A hydrated leaf value: either a primitive wrapped in a scalar cell, or
/// a nested model instance (stored directly, not wrapped in a cell).
#[derive(Debug, Clone)]
pub enum Hydrated {
    /// A primitive leaf, held in a reactive scalar cell.
    Scalar(ScalarCell<Value>),

    /// A nested model.
    Instance(ModelInstance),
}

impl Hydrated {
    /// Get the scalar cell, if this leaf is a primitive.
    pub fn as_scalar(&self) -> Option<&ScalarCell<Value>> {
        match self {
            Hydrated::Scalar(cell) => Some(cell),
            Hydrated::Instance(_) => None,
        }
    }

    /// Get the nested instance, if this leaf is a model.
    pub fn as_instance(&self) -> Option<&ModelInstance> {
        match self {
            Hydrated::Scalar(_) => None,
            Hydrated::Instance(instance) => Some(instance),
        }
    }
}

/// One property's storage inside an instance.
///
/// The variant encodes the property's observed arity: `One` for a single
/// leaf, `Many` for a reactive sequence of leaves. The dehydrator checks
/// this against the declared arity before reading.
#[derive(Debug, Clone)]
pub enum PropertySlot {
    /// A single leaf value.
    One(Hydrated),

    /// An ordered sequence of leaf values.
    Many(SequenceCell<Hydrated>),
}

/// A live instance of a model.
///
/// Created fresh by every hydration call; never cached or shared by the
/// mapper. Cloning an instance is shallow: the clone shares the same
/// underlying cells.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    descriptor: Arc<ModelDescriptor>,
    properties: IndexMap<String, PropertySlot>,
}

impl ModelInstance {
    /// Create an empty instance of the given model.
    pub fn new(descriptor: Arc<ModelDescriptor>) -> Self {
        Self {
            descriptor,
            properties: IndexMap::new(),
        }
    }

    /// Get the descriptor this instance was created from.
    pub fn descriptor(&self) -> &Arc<ModelDescriptor> {
        &self.descriptor
    }

    /// Check whether this instance belongs to the given model.
    ///
    /// Identity, not structure: two descriptors with identical properties
    /// are still different models.
    pub fn is_instance_of(&self, descriptor: &Arc<ModelDescriptor>) -> bool {
        Arc::ptr_eq(&self.descriptor, descriptor)
    }

    /// Get a property's slot, if present.
    pub fn get(&self, key: &str) -> Option<&PropertySlot> {
        self.properties.get(key)
    }

    /// Check whether a property is present.
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Set a property's slot, replacing any existing one.
    ///
    /// The hydrator populates instances through this; a host may also use
    /// it to build or reshape instances by hand.
    pub fn set(&mut self, key: impl Into<String>, slot: PropertySlot) {
        self.properties.insert(key.into(), slot);
    }

    /// Remove a property's slot.
    pub fn remove(&mut self, key: &str) -> Option<PropertySlot> {
        self.properties.shift_remove(key)
    }

    /// Iterate present properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySlot)> {
        self.properties.iter().map(|(k, s)| (k.as_str(), s))
    }

    /// Navigate to a single-valued primitive property's cell.
    ///
    /// Returns `None` if the key is absent, sequence-valued, or a nested
    /// model.
    pub fn scalar(&self, key: &str) -> Option<&ScalarCell<Value>> {
        match self.get(key)? {
            PropertySlot::One(leaf) => leaf.as_scalar(),
            PropertySlot::Many(_) => None,
        }
    }

    /// Navigate to a sequence-valued property's cell.
    pub fn sequence(&self, key: &str) -> Option<&SequenceCell<Hydrated>> {
        match self.get(key)? {
            PropertySlot::One(_) => None,
            PropertySlot::Many(cell) => Some(cell),
        }
    }

    /// Navigate to a single-valued nested model.
    pub fn model(&self, key: &str) -> Option<&ModelInstance> {
        match self.get(key)? {
            PropertySlot::One(leaf) => leaf.as_instance(),
            PropertySlot::Many(_) => None,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
