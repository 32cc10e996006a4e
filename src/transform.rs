//! Stateless value transforms applied to mapped values.

use serde::de::{Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named value transform. Pure and infallible: applying a transform never
/// raises, and unknown names deserialize as [`Transform::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Transform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    TitleCase,
    Trim,
}

/// The result of applying a transform to a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformOutcome {
    pub value: String,
    /// True only when the output differs from the input, even for a nominal
    /// transform (trimming an already-trimmed value reports false).
    pub was_transformed: bool,
}

impl Transform {
    /// Resolves a transform by its wire name. Unknown names act as identity.
    pub fn from_name(name: &str) -> Self {
        match name {
            "uppercase" => Transform::Uppercase,
            "lowercase" => Transform::Lowercase,
            "title_case" => Transform::TitleCase,
            "trim" => Transform::Trim,
            _ => Transform::None,
        }
    }

    /// The wire name of this transform.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::None => "none",
            Transform::Uppercase => "uppercase",
            Transform::Lowercase => "lowercase",
            Transform::TitleCase => "title_case",
            Transform::Trim => "trim",
        }
    }

    /// Applies this transform to `value`, reporting whether anything changed.
    pub fn apply(&self, value: &str) -> TransformOutcome {
        let transformed = match self {
            Transform::None => value.to_string(),
            Transform::Uppercase => value.to_uppercase(),
            Transform::Lowercase => value.to_lowercase(),
            Transform::TitleCase => title_case(value),
            Transform::Trim => value.trim().to_string(),
        };
        let was_transformed = transformed != value;
        TransformOutcome {
            value: transformed,
            was_transformed,
        }
    }
}

/// Uppercases the first character of each alphanumeric run and lowercases
/// the remainder. Whitespace and punctuation delimit runs and pass through.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_boundary = true;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Transform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Manual impl so unknown names degrade to identity instead of failing
// deserialization of a whole mapping set.
impl<'de> Deserialize<'de> for Transform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl Visitor<'_> for NameVisitor {
            type Value = Transform;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a transform name")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Transform, E> {
                Ok(Transform::from_name(v))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
