//! Model Descriptors
//!
//! A descriptor is the schema object for one model type: a name plus an
//! ordered map from property key to that property's arity and kind. The
//! mapper only ever reads descriptors; they are built once by the host
//! and shared via `Arc` so nested schemas can reference each other.

use std::sync::Arc;

use indexmap::IndexMap;

/// The declared kind of a property's values.
///
/// Primitive kinds wrap their values in a scalar cell during hydration.
/// `Model` kinds recurse into the nested descriptor instead, replacing the
/// class-reference dispatch a dynamic host language would use.
#[derive(Debug, Clone)]
pub enum Kind {
    /// A JSON boolean.
    Boolean,

    /// A JSON number.
    Number,

    /// A JSON string.
    Text,

    /// A nested model described by another descriptor.
    Model(Arc<ModelDescriptor>),
}

impl Kind {
    /// Check whether this kind is one of the three primitive kinds.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Kind::Model(_))
    }
}

/// Metadata for one declared property: its arity and its kind.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    /// `true` means the property holds zero or more values of `kind`;
    /// `false` means exactly one (or absent) value.
    pub multiple: bool,

    /// What each value of the property is.
    pub kind: Kind,
}

impl PropertyMetadata {
    /// Metadata for a single-valued property.
    pub fn one(kind: Kind) -> Self {
        Self {
            multiple: false,
            kind,
        }
    }

    /// Metadata for a sequence-valued property.
    pub fn many(kind: Kind) -> Self {
        Self {
            multiple: true,
            kind,
        }
    }
}

/// The schema for one model type.
///
/// Property iteration order is declaration order, so hydration and
/// dehydration walk properties deterministically.
///
/// # Example
///
/// ```rust,ignore
/// let user = ModelDescriptor::builder("User")
///     .property("name", PropertyMetadata::one(Kind::Text))
///     .build();
///
/// let post = ModelDescriptor::builder("Post")
///     .property("author", PropertyMetadata::one(Kind::Model(user.clone())))
///     .property("likes", PropertyMetadata::one(Kind::Number))
///     .build();
/// ```
#[derive(Debug)]
pub struct ModelDescriptor {
    name: String,
    properties: IndexMap<String, PropertyMetadata>,
}

impl ModelDescriptor {
    /// Start building a descriptor with the given model name.
    pub fn builder(name: impl Into<String>) -> ModelDescriptorBuilder {
        ModelDescriptorBuilder {
            name: name.into(),
            properties: IndexMap::new(),
        }
    }

    /// Get the model's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate declared properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyMetadata)> {
        self.properties.iter().map(|(k, m)| (k.as_str(), m))
    }

    /// Get the metadata for one property key, if declared.
    pub fn metadata(&self, key: &str) -> Option<&PropertyMetadata> {
        self.properties.get(key)
    }

    /// Get the number of declared properties.
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Builder for [`ModelDescriptor`].
pub struct ModelDescriptorBuilder {
    name: String,
    properties: IndexMap<String, PropertyMetadata>,
}

impl ModelDescriptorBuilder {
    /// Declare a property. Redeclaring a key replaces its metadata but
    /// keeps its original position.
    pub fn property(mut self, key: impl Into<String>, metadata: PropertyMetadata) -> Self {
        self.properties.insert(key.into(), metadata);
        self
    }

    /// Finish building, returning a shareable descriptor.
    pub fn build(self) -> Arc<ModelDescriptor> {
        Arc::new(ModelDescriptor {
            name: self.name,
            properties: self.properties,
        })
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
