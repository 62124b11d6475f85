//! Value Classification
//!
//! Both mapper directions must answer the same question per property: is
//! this value sequence-shaped or not, and does that agree with the
//! declared arity? Hydration asks it of a raw JSON value, dehydration of
//! an instance slot. This module gives both paths one vocabulary
//! ([`Arity`], [`Shape`]) and one arity gate ([`check`]).

use std::fmt;

use serde_json::Value;

use crate::error::ShapeError;
use crate::schema::PropertySlot;

/// A property's declared arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one (or absent) value.
    One,

    /// Zero or more values.
    Multiple,
}

impl Arity {
    /// The arity a `multiple` flag declares.
    pub fn expected(multiple: bool) -> Self {
        if multiple {
            Arity::Multiple
        } else {
            Arity::One
        }
    }

    /// The shape a value of this arity must have.
    pub fn shape(self) -> Shape {
        match self {
            Arity::One => Shape::NotArray,
            Arity::Multiple => Shape::Array,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::One => write!(f, "one"),
            Arity::Multiple => write!(f, "multiple"),
        }
    }
}

/// The observed shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// An ordered sequence of values.
    Array,

    /// A single value.
    NotArray,
}

impl Shape {
    /// Classify a raw JSON value (hydration path).
    pub fn of_json(value: &Value) -> Self {
        if value.is_array() {
            Shape::Array
        } else {
            Shape::NotArray
        }
    }

    /// Classify an instance slot (dehydration path).
    ///
    /// A `Many` slot reads out as a real array, a `One` slot as a single
    /// value, so the slot variant is the shape.
    pub fn of_slot(slot: &PropertySlot) -> Self {
        match slot {
            PropertySlot::One(_) => Shape::NotArray,
            PropertySlot::Many(_) => Shape::Array,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Array => write!(f, "array"),
            Shape::NotArray => write!(f, "not array"),
        }
    }
}

/// Verify that an observed shape satisfies a declared arity.
///
/// This is the single validation the mapper performs. On disagreement it
/// fails with a [`ShapeError::ShapeMismatch`] naming the model, the
/// property, the expected arity and the observed shape.
pub fn check(model: &str, property: &str, expected: Arity, actual: Shape) -> Result<(), ShapeError> {
    if expected.shape() == actual {
        Ok(())
    } else {
        Err(ShapeError::ShapeMismatch {
            model: model.to_string(),
            property: property.to_string(),
            expected,
            actual,
        })
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::{ScalarCell, SequenceCell};
    use crate::schema::Hydrated;
    use serde_json::json;

    #[test]
    fn json_shapes() {
        assert_eq!(Shape::of_json(&json!([1, 2])), Shape::Array);
        assert_eq!(Shape::of_json(&json!([])), Shape::Array);
        assert_eq!(Shape::of_json(&json!(1)), Shape::NotArray);
        assert_eq!(Shape::of_json(&json!("a")), Shape::NotArray);
        assert_eq!(Shape::of_json(&json!({"k": []})), Shape::NotArray);
        assert_eq!(Shape::of_json(&json!(null)), Shape::NotArray);
    }

    #[test]
    fn slot_shapes() {
        let one = PropertySlot::One(Hydrated::Scalar(ScalarCell::new(json!(1))));
        assert_eq!(Shape::of_slot(&one), Shape::NotArray);

        let many = PropertySlot::Many(SequenceCell::new());
        assert_eq!(Shape::of_slot(&many), Shape::Array);
    }

    #[test]
    fn check_accepts_matching_arity() {
        assert!(check("M", "k", Arity::One, Shape::NotArray).is_ok());
        assert!(check("M", "k", Arity::Multiple, Shape::Array).is_ok());
    }

    #[test]
    fn check_rejects_mismatched_arity() {
        let err = check("M", "k", Arity::Multiple, Shape::NotArray).unwrap_err();
        let ShapeError::ShapeMismatch {
            expected, actual, ..
        } = err;
        assert_eq!(expected, Arity::Multiple);
        assert_eq!(actual, Shape::NotArray);

        assert!(check("M", "k", Arity::One, Shape::Array).is_err());
    }

    #[test]
    fn display_vocabulary() {
        assert_eq!(Arity::One.to_string(), "one");
        assert_eq!(Arity::Multiple.to_string(), "multiple");
        assert_eq!(Shape::Array.to_string(), "array");
        assert_eq!(Shape::NotArray.to_string(), "not array");
    }
}
