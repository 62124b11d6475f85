//! Error Types
//!
//! The mapper performs exactly one kind of validation: a property's
//! declared arity must agree with the observed shape of its value. Every
//! failure is therefore a shape mismatch; anything else (extra keys,
//! wrong primitive types) passes through unchecked.

use thiserror::Error;

use crate::mapper::{Arity, Shape};

/// Errors produced by hydration and dehydration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A property's declared arity disagrees with the observed shape of
    /// its value (array vs. non-array).
    #[error("property `{property}` of model `{model}`: expected {expected} but got {actual}")]
    ShapeMismatch {
        /// The model whose property failed the check.
        model: String,
        /// The offending property key.
        property: String,
        /// The declared arity ("multiple" or "one").
        expected: Arity,
        /// The observed shape ("array" or "not array").
        actual: Shape,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_expected_and_actual() {
        let err = ShapeError::ShapeMismatch {
            model: "Post".to_string(),
            property: "comments".to_string(),
            expected: Arity::Multiple,
            actual: Shape::NotArray,
        };
        assert_eq!(
            err.to_string(),
            "property `comments` of model `Post`: expected multiple but got not array"
        );

        let err = ShapeError::ShapeMismatch {
            model: "Post".to_string(),
            property: "likes".to_string(),
            expected: Arity::One,
            actual: Shape::Array,
        };
        assert_eq!(
            err.to_string(),
            "property `likes` of model `Post`: expected one but got array"
        );
    }
}
