//! Preset answers for feature options.
//!
//! Answers come from three places, applied in increasing precedence on top of
//! the built-in defaults: the template configuration's `defaults` table, a
//! JSON object read from stdin, and `KEY=VALUE` pairs from the command line.

use std::io::Read;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::features::FeatureSelection;

/// Parses a `KEY=VALUE` command-line assignment.
///
/// Shaped for clap's `value_parser`, hence the `String` error.
pub fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing option name in '{s}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Parses an answers document. Blank input means "no answers".
pub fn parse_answers(content: &str) -> Result<serde_json::Value> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse answers as JSON: {e}")))
}

pub fn load_from_stdin() -> Result<serde_json::Value> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Applies a JSON answers object to `selection`.
///
/// String values are parsed as option values, booleans map to `yes`/`no`.
pub fn apply_answers(selection: &mut FeatureSelection, answers: &serde_json::Value) -> Result<()> {
    let object = match answers {
        serde_json::Value::Null => return Ok(()),
        serde_json::Value::Object(object) => object,
        other => {
            return Err(Error::ConfigError(format!(
                "answers must be a JSON object, got: {other}"
            )))
        }
    };

    for (key, value) in object {
        let value = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Bool(true) => "yes".to_string(),
            serde_json::Value::Bool(false) => "no".to_string(),
            other => other.to_string(),
        };
        selection.set(key, &value)?;
    }
    Ok(())
}

/// Builds the final selection from every answer source.
pub fn resolve_features(
    config_defaults: &IndexMap<String, String>,
    answers: &serde_json::Value,
    assignments: &[(String, String)],
) -> Result<FeatureSelection> {
    let mut selection = FeatureSelection::default();

    for (key, value) in config_defaults {
        selection.set(key, value)?;
    }
    apply_answers(&mut selection, answers)?;
    for (key, value) in assignments {
        selection.set(key, value)?;
    }

    log::debug!("Resolved features: {selection:?}");
    Ok(selection)
}
