//! Result mapping produced by [`parse`](crate::parse) and consumed by
//! [`assemble`](crate::assemble).

use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RouteError;

/// Result of matching a fragment sequence: ref name to value.
pub type ResultMap = BTreeMap<String, Value>;

static NULL: Value = Value::Null;

/// A value in a result map.
///
/// Serializes to the plain JSON shape of a route result: captures are strings,
/// selections are `{ "result": key, "data": {...} }` objects, named fragments are
/// nested objects and absent optional parts are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent optional part.
    Null,
    /// A flag. `true` marks a named fragment as present during assembly.
    Bool(bool),
    /// A number substituted into a capture.
    Number(serde_json::Number),
    /// A captured segment.
    String(String),
    /// The branch an alternative matched.
    Choice(Choice),
    /// Result of a named fragment sequence.
    Map(ResultMap),
}

/// The branch selected by an alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Key of the matched branch.
    pub result: String,
    /// Result produced by the branch.
    pub data: Box<Value>,
}

impl Choice {
    /// Creates a selection of branch `result` with the given branch data.
    #[must_use]
    pub fn new(result: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            result: result.into(),
            data: Box::new(data.into()),
        }
    }
}

impl Value {
    /// Whether this value counts as present.
    ///
    /// `null`, `false`, zero and the empty string are all treated as absent.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Self::String(text) => !text.is_empty(),
            Self::Choice(_) | Self::Map(_) => true,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the captured text, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the selection, if this is an alternative result.
    #[must_use]
    pub const fn as_choice(&self) -> Option<&Choice> {
        match self {
            Self::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// Returns the nested map, if this is a fragment result.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ResultMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in a map value.
    ///
    /// Missing keys, and lookups on anything but a map, read as `null`.
    #[must_use]
    pub fn get(&self, key: &str) -> &Self {
        match self {
            Self::Map(map) => map.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }
}

impl Index<&str> for Value {
    type Output = Self;

    fn index(&self, key: &str) -> &Self {
        self.get(key)
    }
}

impl From<ResultMap> for Value {
    fn from(map: ResultMap) -> Self {
        Self::Map(map)
    }
}

impl From<Choice> for Value {
    fn from(choice: Choice) -> Self {
        Self::Choice(choice)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(String::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = serde_json::Value::deserialize(deserializer)?;
        Self::try_from(json).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = RouteError;

    /// Converts JSON data. Objects always become maps; alternative slots read
    /// their `result` and `data` keys during assembly.
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(_) => {
                return Err(RouteError::UnsupportedData(String::from("array")));
            }
            serde_json::Value::Object(object) => Self::Map(
                object
                    .into_iter()
                    .map(|(key, value)| Ok((key, Self::try_from(value)?)))
                    .collect::<Result<_, RouteError>>()?,
            ),
        })
    }
}
