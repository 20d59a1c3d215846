// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Wire token representation.
//!
//! A token is the single scalar the external protocol carries for one
//! enumerator: a signed integer, a text string, or the protocol's null marker.
//! Decoding accepts every shape; encoding only ever produces [`WireToken::Text`]
//! (or [`WireToken::Null`] for an absent optional value).

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::error::{CodecError, Result};

/// One scalar enum token as carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireToken {
    /// Raw integer, interpreted as the enumerator's ordinal
    Int(i64),
    /// Text, matched against enumerator names and wire strings
    Text(String),
    /// The protocol's "no value" marker
    Null,
}

impl WireToken {
    /// Create a text token.
    pub fn text(value: impl Into<String>) -> Self {
        WireToken::Text(value.into())
    }

    /// Check if this token is the null marker.
    pub fn is_null(&self) -> bool {
        matches!(self, WireToken::Null)
    }

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireToken::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            WireToken::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the kind of this token as a string.
    pub fn kind(&self) -> &'static str {
        match self {
            WireToken::Int(_) => "integer",
            WireToken::Text(_) => "string",
            WireToken::Null => "null",
        }
    }

    /// Convert a JSON scalar to a token.
    ///
    /// Only integers that fit in `i64`, strings and `null` are tokens. Floats,
    /// booleans, arrays and objects are rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(WireToken::Null),
            serde_json::Value::String(s) => Ok(WireToken::Text(s.clone())),
            serde_json::Value::Number(n) => n.as_i64().map(WireToken::Int).ok_or_else(|| {
                CodecError::parse("json token", format!("number {n} is not an i64 ordinal"))
            }),
            serde_json::Value::Bool(_) => {
                Err(CodecError::parse("json token", "boolean is not an enum token"))
            }
            serde_json::Value::Array(_) => {
                Err(CodecError::parse("json token", "array is not an enum token"))
            }
            serde_json::Value::Object(_) => {
                Err(CodecError::parse("json token", "object is not an enum token"))
            }
        }
    }

    /// Convert this token to a JSON scalar.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            WireToken::Int(i) => serde_json::Value::Number(serde_json::Number::from(*i)),
            WireToken::Text(s) => serde_json::Value::String(s.clone()),
            WireToken::Null => serde_json::Value::Null,
        }
    }
}

impl fmt::Display for WireToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireToken::Int(i) => write!(f, "{i}"),
            WireToken::Text(s) => write!(f, "\"{s}\""),
            WireToken::Null => write!(f, "null"),
        }
    }
}

impl From<i64> for WireToken {
    fn from(value: i64) -> Self {
        WireToken::Int(value)
    }
}

impl From<i32> for WireToken {
    fn from(value: i32) -> Self {
        WireToken::Int(value as i64)
    }
}

impl From<&str> for WireToken {
    fn from(value: &str) -> Self {
        WireToken::Text(value.to_string())
    }
}

impl From<String> for WireToken {
    fn from(value: String) -> Self {
        WireToken::Text(value)
    }
}

impl Serialize for WireToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            WireToken::Int(i) => serializer.serialize_i64(*i),
            WireToken::Text(s) => serializer.serialize_str(s),
            WireToken::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for WireToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(TokenVisitor)
    }
}

struct TokenVisitor;

impl<'de> Visitor<'de> for TokenVisitor {
    type Value = WireToken;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an enum token (integer ordinal, string or null)")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<WireToken, E> {
        Ok(WireToken::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<WireToken, E> {
        i64::try_from(v)
            .map(WireToken::Int)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<WireToken, E> {
        Ok(WireToken::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<WireToken, E> {
        Ok(WireToken::Text(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<WireToken, E> {
        Ok(WireToken::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<WireToken, E> {
        Ok(WireToken::Null)
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<WireToken, D::Error> {
        deserializer.deserialize_any(self)
    }
}
