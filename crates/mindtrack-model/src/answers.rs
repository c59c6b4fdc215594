//! Raw questionnaire answers.
//!
//! Answers arrive from the questionnaire as loosely typed JSON: sliders
//! produce numbers, radio groups and free-text fields produce strings. Any
//! other JSON value is kept verbatim so that deserializing an answers object
//! never fails; consumers decide how to treat wrongly typed entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ModelError, Result};

/// A single answer value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Slider answer (nominally 0-10).
    Number(f64),
    /// Radio option label or free text.
    Text(String),
    /// Anything else (bool, null, array, object).
    Other(Value),
}

impl AnswerValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// JSON type name used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Number(_) => "number",
            AnswerValue::Text(_) => "string",
            AnswerValue::Other(value) => json_kind(value),
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<u8> for AnswerValue {
    fn from(value: u8) -> Self {
        AnswerValue::Number(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Other(Value::Bool(value))
    }
}

/// Mapping from question identifier to answer.
///
/// Keys are kept sorted so serialized documents are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentAnswers(BTreeMap<String, AnswerValue>);

impl AssessmentAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Numeric answer for `key`, or `None` when absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(AnswerValue::as_number)
    }

    /// Text answer for `key`, or `None` when absent or not a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Merge `other` into `self`, replacing existing keys.
    pub fn extend(&mut self, other: AssessmentAnswers) {
        self.0.extend(other.0);
    }

    /// Build answers from an arbitrary JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAnObject`] when `value` is not a JSON object.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ModelError::NotAnObject {
                found: json_kind(value),
            });
        };
        Ok(map
            .iter()
            .map(|(key, value)| (key.clone(), answer_from_json(value)))
            .collect())
    }

    /// Parse answers from JSON text.
    ///
    /// # Errors
    ///
    /// Fails when the text is not valid JSON or not an object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }
}

impl FromIterator<(String, AnswerValue)> for AssessmentAnswers {
    fn from_iter<I: IntoIterator<Item = (String, AnswerValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn answer_from_json(value: &Value) -> AnswerValue {
    match value {
        Value::Number(number) => match number.as_f64() {
            Some(value) => AnswerValue::Number(value),
            None => AnswerValue::Other(Value::Number(number.clone())),
        },
        Value::String(text) => AnswerValue::Text(text.clone()),
        other => AnswerValue::Other(other.clone()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
