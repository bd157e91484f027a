use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job's raw requirements payload as it arrives from the store.
///
/// Historically this column has held nulls, JSON objects, and
/// JSON-encoded strings. Classifying first keeps the resolution step a
/// total function rather than a chain of fallible casts.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRequirementsInput {
    Absent,
    Structured(Value),
    Encoded(String),
}

impl RawRequirementsInput {
    pub fn from_value(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => RawRequirementsInput::Absent,
            Some(Value::String(s)) => RawRequirementsInput::Encoded(s.clone()),
            Some(v @ Value::Object(_)) => RawRequirementsInput::Structured(v.clone()),
            Some(other) => {
                tracing::warn!("requirements payload has unexpected type: {}", other);
                RawRequirementsInput::Absent
            }
        }
    }
}

/// Canonical requirements record fed into the job context.
///
/// Deliberately permissive: this feeds a prompt, not a schema
/// validator. Every field has a defined default and malformed input
/// degrades to the all-defaults record instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub non_negotiables_text: String,
    #[serde(default)]
    pub desired_trajectory_text: String,
    #[serde(default)]
    pub needs_technical_background: bool,
    #[serde(default)]
    pub seniority: String,
    #[serde(default)]
    pub industries: Vec<String>,
}

impl JobRequirements {
    /// Resolve a raw payload into the canonical record. Total function:
    /// malformed JSON or wrong-typed fields yield defaults, never errors.
    pub fn resolve(input: RawRequirementsInput) -> Self {
        let value = match input {
            RawRequirementsInput::Absent => return Self::default(),
            RawRequirementsInput::Structured(value) => value,
            RawRequirementsInput::Encoded(text) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("failed to parse encoded requirements payload: {}", e);
                    return Self::default();
                }
            },
        };

        let map = match value.as_object() {
            Some(map) => map,
            None => return Self::default(),
        };

        Self {
            non_negotiables_text: string_field(map.get("non_negotiables_text")),
            desired_trajectory_text: string_field(map.get("desired_trajectory_text")),
            needs_technical_background: map
                .get("needs_technical_background")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            seniority: string_field(map.get("seniority")),
            industries: industries_field(map.get("industries")),
        }
    }
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

// A bare string counts as a single-element industry list.
fn industries_field(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}
