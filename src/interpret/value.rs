use std::collections::HashMap;

use derive_more::Display;

use super::natural::Natural;

/// Variable name (without the `$`) to value. Names that are absent read as
/// [`Value::Null`].
pub type Bindings = HashMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Value {
    #[display("null")]
    Null,

    #[display("{}", _0)]
    Integer(Natural),

    #[display("{:?}", _0)]
    Str(String),

    #[display("{}", _0)]
    Bool(bool),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
        }
    }

    pub fn get_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_rust_values() {
        assert_eq!(Value::from(5u64), Value::Integer(Natural::from(5u64)));
        assert_eq!(Value::from(7u32), Value::Integer(Natural::from(7u64)));
        assert_eq!(Value::from("a"), Value::Str("a".to_string()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<u64>), Value::Null);
        assert_eq!(Value::from(Some("b")), Value::Str("b".to_string()));
    }

    #[test]
    fn equality_is_type_strict() {
        assert_ne!(Value::from(5u64), Value::Str("5".to_string()));
        assert_ne!(Value::Bool(false), Value::Null);
        assert_ne!(Value::from(0u64), Value::Bool(false));
    }

    #[test]
    fn displays() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(12u64).to_string(), "12");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }

    #[test]
    fn accessors() {
        assert_eq!(Value::Bool(true).get_bool(), Some(true));
        assert_eq!(Value::from(1u64).get_bool(), None);
        assert!(Value::Null.is_null());
        assert_eq!(Value::from("x").type_name(), "string");
    }
}
