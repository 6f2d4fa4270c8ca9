//! Core data types: type tags, typed argument values and resolved properties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigParserError;

/// A single resolved configuration entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigProperty {
    /// Property key, trimmed.
    pub name: String,

    /// Literal text, or base64 of a serialized object.
    pub value: String,
}

impl ConfigProperty {
    /// Create a new property.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The nine argument types an `<arg type="...">` may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    String,
    ByteArray,
    CharArray,
    Int,
    Short,
    Long,
    Float,
    Double,
    Boolean,
}

impl TypeTag {
    /// All recognized tags, in declaration order.
    pub const ALL: [TypeTag; 9] = [
        TypeTag::String,
        TypeTag::ByteArray,
        TypeTag::CharArray,
        TypeTag::Int,
        TypeTag::Short,
        TypeTag::Long,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Boolean,
    ];

    /// The spelling used in the `type` attribute.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::ByteArray => "byte[]",
            TypeTag::CharArray => "char[]",
            TypeTag::Int => "int",
            TypeTag::Short => "short",
            TypeTag::Long => "long",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = ConfigParserError;

    /// Tags are matched exactly; `Int` or `string` are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConfigParserError::UnsupportedType {
                type_name: s.to_string(),
            })
    }
}

/// A typed constructor argument value.
///
/// The variant determines the argument's [`TypeTag`], so a value can
/// never disagree with its type.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    String(String),
    ByteArray(Vec<u8>),
    CharArray(Vec<char>),
    Int(i32),
    Short(i16),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
}

impl ArgValue {
    /// The type tag of this value.
    #[must_use]
    pub fn type_tag(&self) -> TypeTag {
        match self {
            ArgValue::String(_) => TypeTag::String,
            ArgValue::ByteArray(_) => TypeTag::ByteArray,
            ArgValue::CharArray(_) => TypeTag::CharArray,
            ArgValue::Int(_) => TypeTag::Int,
            ArgValue::Short(_) => TypeTag::Short,
            ArgValue::Long(_) => TypeTag::Long,
            ArgValue::Float(_) => TypeTag::Float,
            ArgValue::Double(_) => TypeTag::Double,
            ArgValue::Boolean(_) => TypeTag::Boolean,
        }
    }
}

/// Infinities print as `Infinity`, the spelling the caster accepts.
fn fmt_float(
    f: &mut fmt::Formatter<'_>,
    is_infinite: bool,
    negative: bool,
    plain: &dyn fmt::Display,
) -> fmt::Result {
    match (is_infinite, negative) {
        (true, true) => f.write_str("-Infinity"),
        (true, false) => f.write_str("Infinity"),
        _ => plain.fmt(f),
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(s) => f.write_str(s),
            ArgValue::ByteArray(b) => f.write_str(&String::from_utf8_lossy(b)),
            ArgValue::CharArray(c) => f.write_str(&c.iter().collect::<String>()),
            ArgValue::Int(v) => write!(f, "{v}"),
            ArgValue::Short(v) => write!(f, "{v}"),
            ArgValue::Long(v) => write!(f, "{v}"),
            ArgValue::Float(v) => fmt_float(f, v.is_infinite(), v.is_sign_negative(), v),
            ArgValue::Double(v) => fmt_float(f, v.is_infinite(), v.is_sign_negative(), v),
            ArgValue::Boolean(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::String(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::String(value.to_string())
    }
}

impl From<Vec<u8>> for ArgValue {
    fn from(value: Vec<u8>) -> Self {
        ArgValue::ByteArray(value)
    }
}

impl From<Vec<char>> for ArgValue {
    fn from(value: Vec<char>) -> Self {
        ArgValue::CharArray(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i16> for ArgValue {
    fn from(value: i16) -> Self {
        ArgValue::Short(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Long(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        ArgValue::Float(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Double(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Boolean(value)
    }
}
