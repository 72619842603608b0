//! Query options for list and count operations.
//!
//! Options are plain serde structs; every field is optional and omitted from
//! the query string when unset. [`serialize_query`] turns an options value
//! into URL query pairs, comma-joining list values (e.g. `ids=1,2,3`).

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// General list options accepted by most collection endpoints.
///
/// # Example
///
/// ```rust
/// use shoplazza_api::client::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(10),
///     vendor: Some("acme".to_string()),
///     ..ListOptions::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Page number to fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Restrict results to those after the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<String>,
    /// Show resources created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Show resources created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Show resources updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    /// Show resources updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
    /// Sort order (e.g. `created_at desc`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    /// Filter by vendor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Restrict results to the given IDs, sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

/// General count options accepted by most collection count endpoints.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CountOptions {
    /// Count resources created at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,
    /// Count resources created at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,
    /// Count resources updated at or after this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,
    /// Count resources updated at or before this time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}

/// Serializes an options value to query pairs.
///
/// Null fields are skipped, scalars are stringified, and arrays are joined
/// with commas. An options bag with every field unset yields no pairs at
/// all.
pub(crate) fn serialize_query<T: Serialize>(
    options: &T,
) -> Result<Vec<(String, String)>, serde_json::Error> {
    let value = serde_json::to_value(options)?;

    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => pairs.push((key, s)),
            Value::Number(n) => pairs.push((key, n.to_string())),
            Value::Bool(b) => pairs.push((key, b.to_string())),
            Value::Array(entries) => {
                let joined: Vec<String> = entries
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect();
                if !joined.is_empty() {
                    pairs.push((key, joined.join(",")));
                }
            }
            Value::Object(_) => pairs.push((key, value.to_string())),
        }
    }

    Ok(pairs)
}
