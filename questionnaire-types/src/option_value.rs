use std::fmt;

use serde::{Deserialize, Serialize};

/// The underlying value behind an option label.
///
/// Deserializes from any JSON value, so `"optValues": [1, "b", true]` works.
/// Values that are not a plain scalar (`null`, arrays, objects) are kept as
/// [`OptionValue::Json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A boolean value.
    Bool(bool),

    /// An integer value.
    Int(i64),

    /// A floating-point value.
    Float(f64),

    /// A string value.
    String(String),

    /// Any other JSON value.
    Json(serde_json::Value),
}

impl OptionValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Json(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for OptionValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for OptionValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_mixed_scalars() {
        let values: Vec<OptionValue> = serde_json::from_str(r#"[1, "b", true, 2.5]"#).unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Int(1),
                OptionValue::String("b".into()),
                OptionValue::Bool(true),
                OptionValue::Float(2.5),
            ]
        );
    }

    #[test]
    fn deserialize_non_scalars() {
        let values: Vec<OptionValue> = serde_json::from_str(r#"[null, {"id": 1}, [2]]"#).unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Json(serde_json::Value::Null),
                OptionValue::Json(serde_json::json!({"id": 1})),
                OptionValue::Json(serde_json::json!([2])),
            ]
        );
    }

    #[test]
    fn accessors() {
        assert_eq!(OptionValue::from("b").as_str(), Some("b"));
        assert_eq!(OptionValue::from(2).as_int(), Some(2));
        assert_eq!(OptionValue::from(true).as_int(), None);
        assert_eq!(OptionValue::Json(serde_json::Value::Null).as_str(), None);
    }

    #[test]
    fn int_widens_to_float() {
        assert_eq!(OptionValue::Int(3).as_float(), Some(3.0));
        assert_eq!(OptionValue::String("3".into()).as_float(), None);
    }

    #[test]
    fn display() {
        assert_eq!(OptionValue::from("yes").to_string(), "yes");
        assert_eq!(OptionValue::from(7).to_string(), "7");
        assert_eq!(OptionValue::Json(serde_json::json!({"id": 1})).to_string(), r#"{"id":1}"#);
    }
}
