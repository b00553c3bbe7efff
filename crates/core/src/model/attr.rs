//! Dynamically typed attribute values.
//!
//! Decoders expose descriptor data they have no structured field for as
//! `AttrValue` trees. The scene builder only reads them for color fallbacks;
//! the serializer writes them through when a node carries one (text content).

use indexmap::IndexMap;
use serde::ser::{Error as _, Serialize, SerializeSeq, Serializer};

/// An attribute value as handed over by the decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Real(f64),
    Str(String),
    /// Raw bytes (descriptor raw data, unterminated strings)
    Bytes(Vec<u8>),
    List(Vec<Self>),
    Dict(IndexMap<String, Self>),
    /// Decoder-specific scalar wrapper, e.g. a descriptor `String` object.
    ///
    /// `value` holds the primitive it wraps, if it exposes one.
    Opaque {
        type_name: String,
        value: Option<Box<Self>>,
    },
}

impl AttrValue {
    /// Name of the variant, for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
            Self::Opaque { .. } => "opaque",
        }
    }

    /// Numeric value, ints coerced to f64. Opaque wrappers are looked through.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Real(n) => Some(*n),
            Self::Opaque { value: Some(v), .. } => v.as_num(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Opaque { value: Some(v), .. } => v.as_str(),
            _ => None,
        }
    }

    pub const fn as_list(&self) -> Option<&Vec<Self>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_dict(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Dict(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key in a dict value.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_dict().and_then(|map| map.get(key))
    }

    /// True for null, empty strings, empty lists and empty dicts.
    ///
    /// Opaque wrappers are empty when they wrap nothing or an empty value.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Dict(map) => map.is_empty(),
            Self::Opaque { value, .. } => value.as_deref().is_none_or(Self::is_empty),
            Self::Bool(_) | Self::Int(_) | Self::Real(_) => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        Self::Real(n)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Leaves are written as their primitive. An opaque wrapper with no
/// primitive to fall back on cannot be represented and fails serialization.
impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Real(n) => serializer.serialize_f64(*n),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Dict(map) => map.serialize(serializer),
            Self::Opaque {
                value: Some(v), ..
            } => v.serialize(serializer),
            Self::Opaque {
                type_name,
                value: None,
            } => Err(S::Error::custom(format!(
                "type {type_name} not serializable"
            ))),
        }
    }
}
