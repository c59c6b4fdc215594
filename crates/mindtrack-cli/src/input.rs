//! Answer documents and `key=value` overrides from the command line.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use mindtrack_model::{AnswerValue, AssessmentAnswers, QuestionBank};
use serde_json::{Map, Value};

/// Parse a `key=value` override.
///
/// A value that parses as a finite number becomes a number; anything else
/// is kept as text, so `appetite=Below average` works unquoted.
pub fn parse_override(raw: &str) -> Result<(String, AnswerValue)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("expected key=value, got {raw:?}");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("missing answer key in {raw:?}");
    }
    let value = value.trim();
    let value = match value.parse::<f64>() {
        Ok(number) if number.is_finite() => AnswerValue::Number(number),
        _ => AnswerValue::Text(value.to_string()),
    };
    Ok((key.to_string(), value))
}

/// Read an answer document from `path`, or stdin when `path` is `-`.
///
/// The document only has to be JSON. Its shape is checked by the scoring
/// engine, which falls back on anything that is not an object.
pub fn read_document(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read answers from stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("parse {} as JSON", path.display()))
}

/// Build the document to score: the file (or an empty object) with
/// `overrides` applied on top.
///
/// Overrides are ignored when the document is not an object.
pub fn build_document(path: Option<&Path>, overrides: &[String]) -> Result<Value> {
    let mut document = match path {
        Some(path) => read_document(path)?,
        None => Value::Object(Map::new()),
    };
    let parsed = overrides
        .iter()
        .map(String::as_str)
        .map(parse_override)
        .collect::<Result<Vec<_>>>()?;
    match &mut document {
        Value::Object(map) => {
            for (key, value) in parsed {
                let value = serde_json::to_value(value).context("encode override")?;
                map.insert(key, value);
            }
        }
        _ if !parsed.is_empty() => {
            tracing::warn!("answer document is not an object; ignoring --set overrides");
        }
        _ => {}
    }
    Ok(document)
}

/// Ids of required questions the document leaves unanswered, in question
/// order. A document that is not an object answers nothing.
pub fn unanswered_required(bank: &QuestionBank, document: &Value) -> Vec<&'static str> {
    match AssessmentAnswers::from_json_value(document) {
        Ok(answers) => bank.missing_required(&answers),
        Err(_) => bank
            .iter()
            .filter(|question| question.required)
            .map(|question| question.id)
            .collect(),
    }
}

/// Fail when a required question has no usable answer.
pub fn ensure_required_answered(bank: &QuestionBank, document: &Value) -> Result<()> {
    let missing = unanswered_required(bank, document);
    if !missing.is_empty() {
        bail!(
            "required questions unanswered: {}; answer them before saving",
            missing.join(", ")
        );
    }
    Ok(())
}
