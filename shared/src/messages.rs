//! Update service message types
//!
//! These types describe:
//! - The POST body sent to the update service
//! - The per-database result bundle it answers with
//! - The error payload of failed requests

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::company_id::CompanyId;
use crate::error::SubmitError;

/// Request body for the update service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub company_id: CompanyId,
}

impl UpdateRequest {
    pub fn new(company_id: CompanyId) -> Self {
        Self { company_id }
    }
}

/// Successful (2xx) response envelope
///
/// `result` is kept as raw JSON: it is either the per-database bundle or an
/// object carrying a single `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub result: Option<Value>,
}

impl UpdateResponse {
    /// Classify the envelope into a bundle or a user-facing error
    pub fn into_bundle(self) -> Result<ResultBundle, SubmitError> {
        let result = match self.result {
            Some(Value::Object(result)) => result,
            _ => return Err(SubmitError::NoData),
        };

        if let Some(message) = result.get("error").and_then(truthy_text) {
            return Err(SubmitError::Business(message));
        }

        if result.is_empty() {
            return Err(SubmitError::NoData);
        }

        Ok(ResultBundle::from_json(result))
    }
}

/// Body of a non-2xx response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, deserialize_with = "display_string")]
    pub message: Option<String>,
}

/// Per-database outcomes in the order the service listed them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultBundle(IndexMap<String, DatabaseOutcome>);

impl ResultBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the raw `result` object. Entries that are not objects
    /// become empty outcomes rather than failing the whole bundle.
    pub fn from_json(result: Map<String, Value>) -> Self {
        result
            .into_iter()
            .map(|(database, entry)| {
                let outcome = serde_json::from_value(entry).unwrap_or_default();
                (database, outcome)
            })
            .collect()
    }

    pub fn insert(&mut self, database: impl Into<String>, outcome: DatabaseOutcome) {
        self.0.insert(database.into(), outcome);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any database returned a customer record
    pub fn has_records(&self) -> bool {
        self.0.values().any(|outcome| outcome.record.is_some())
    }

    /// Database names in tab order
    pub fn databases(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get(&self, database: &str) -> Option<&DatabaseOutcome> {
        self.0.get(database)
    }

    /// Entry at a tab position
    pub fn get_index(&self, index: usize) -> Option<(&str, &DatabaseOutcome)> {
        self.0
            .get_index(index)
            .map(|(database, outcome)| (database.as_str(), outcome))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DatabaseOutcome)> {
        self.0.iter().map(|(database, outcome)| (database.as_str(), outcome))
    }
}

impl FromIterator<(String, DatabaseOutcome)> for ResultBundle {
    fn from_iter<I: IntoIterator<Item = (String, DatabaseOutcome)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Update outcome for one backing database
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseOutcome {
    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<CustomerRecord>,
}

impl DatabaseOutcome {
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_record(mut self, record: CustomerRecord) -> Self {
        self.record = Some(record);
        self
    }
}

/// Customer details as stored in one database. Display-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_country_name: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub customer_currency: Option<String>,

    #[serde(default, deserialize_with = "display_string", skip_serializing_if = "Option::is_none")]
    pub vat_reg_number: Option<String>,
}

impl CustomerRecord {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            customer_code: Some(code.into()),
            ..Self::default()
        }
    }
}

/// Accept any scalar as display text; `null` is absent.
fn display_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Text of a JSON value that counts as set: non-empty strings, non-zero
/// numbers, `true`, arrays and objects.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
