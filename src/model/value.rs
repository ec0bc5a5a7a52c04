// Copyright 2025 yap contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core value type for yap expressions

use bigdecimal::BigDecimal;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest scale, in either direction, still printed without an exponent
const PLAIN_SCALE_LIMIT: i64 = 64;

/// Ordered JSON object
pub type Object = IndexMap<String, Value>;

/// Errors decoding a JSON document into a [`Value`]
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input is not valid JSON
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSON number that is not representable as a decimal
    #[error("invalid JSON number: {literal}")]
    Number {
        /// Number text as found in the document
        literal: String,
    },
}

/// Runtime value produced by resolving paths and evaluating expressions
///
/// Numbers are arbitrary-precision decimals everywhere, so a document number
/// such as `9423233329388648686826386283682368.32` survives decoding,
/// evaluation and encoding unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// JSON null
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number with arbitrary precision
    Number(BigDecimal),
    /// String value
    String(String),
    /// Ordered sequence of values
    Array(Vec<Value>),
    /// Mapping from keys to values, in document order
    Object(Object),
}

impl Value {
    /// Name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the number if this is a number
    pub fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get the string if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements if this is an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is an object
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Parse JSON text into a value
    pub fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Self::try_from(json)
    }

    /// Convert to a `serde_json::Value`, keeping exact number text
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        Ok(match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                serde_json::Value::Number(serde_json::Number::from_str(&number_text(n))?)
            }
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items.iter().map(Value::to_json).collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => {
                let mut object = serde_json::Map::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key.clone(), value.to_json()?);
                }
                serde_json::Value::Object(object)
            }
        })
    }

    /// Encode as compact JSON text
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_json()?)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = DecodeError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => {
                let literal = n.to_string();
                match BigDecimal::from_str(&literal) {
                    Ok(d) => Value::Number(d),
                    Err(_) => return Err(DecodeError::Number { literal }),
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(map) => {
                let mut object = Object::with_capacity(map.len());
                for (key, value) in map {
                    object.insert(key, Value::try_from(value)?);
                }
                Value::Object(object)
            }
        })
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<BigDecimal> for Value {
    fn from(n: BigDecimal) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(BigDecimal::from(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

/// Decimal text of a number; exponent notation only for extreme scales
fn number_text(n: &BigDecimal) -> String {
    let (_, scale) = n.as_bigint_and_scale();
    if scale.abs() <= PLAIN_SCALE_LIMIT {
        n.to_plain_string()
    } else {
        n.to_string()
    }
}

/// Compact JSON rendering; numbers print their exact decimal text
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&number_text(n)),
            Value::String(s) => write!(f, "{}", serde_json::Value::String(s.clone())),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{value}", serde_json::Value::String(key.clone()))?;
                }
                f.write_str("}")
            }
        }
    }
}
