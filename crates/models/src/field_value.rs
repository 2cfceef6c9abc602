use serde::{Serialize, Serializer};
use serde_json::Value;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};

/// Label used for a field that was not present in the raw entry
pub const MISSING_LABEL: &str = "(missing)";

/// A single raw field of a course entry, kept with its original JSON type
#[derive(Debug, Clone, Default)]
pub enum FieldValue {
    /// The key was absent from the entry
    #[default]
    Missing,
    /// The key was present with a `null` value
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Arrays and objects, carried through untouched
    Other(Value),
}

impl FieldValue {
    /// Builds a field from an optional JSON value, `None` meaning the key was absent
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => Self::Missing,
            Some(Value::Null) => Self::Null,
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(Value::Number(n)) => n
                .as_f64()
                .map_or_else(|| Self::Other(Value::Number(n.clone())), Self::Number),
            Some(Value::Bool(b)) => Self::Bool(*b),
            Some(other) => Self::Other(other.clone()),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns the inner string if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the field is absent or `null`
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Missing | Self::Null)
    }

    /// String form used for display and for string-coerced comparisons
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// String form used when ordering records; blank fields order as empty strings
    pub fn sort_text(&self) -> String {
        if self.is_blank() {
            String::new()
        } else {
            self.label()
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Missing, Self::Missing) | (Self::Null, Self::Null) => true,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => a == b,
            _ => false,
        }
    }
}

// JSON numbers are never NaN, so numeric equality is reflexive here
impl Eq for FieldValue {}

impl Hash for FieldValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Missing | Self::Null => {}
            Self::Text(s) => s.hash(state),
            // Normalize -0.0 so it hashes like 0.0, matching `==`
            Self::Number(n) => (if *n == 0.0 { 0.0f64 } else { *n }).to_bits().hash(state),
            Self::Bool(b) => b.hash(state),
            Self::Other(v) => v.to_string().hash(state),
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Missing => write!(f, "{MISSING_LABEL}"),
            Self::Null => write!(f, "null"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => {
                // Format as whole number if it's an integer
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Self::Bool(b) => write!(f, "{b}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing | Self::Null => serializer.serialize_none(),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Other(v) => v.serialize(serializer),
        }
    }
}
