//! Response inspection and error normalization.
//!
//! The platform reports failures in three body shapes: a flat message, a
//! list of messages, or a map of field name to message lists. This module
//! parses whichever shape arrives into a single [`ResponseError`], with
//! rate-limiting (429) and not-acceptable (406) responses specialized on
//! top of it.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::client::errors::{Error, RateLimitError, ResponseDecodingError, ResponseError};

/// The error body envelope.
///
/// Both fields are optional; an empty object (or empty body) normalizes to
/// an error with no message, rendered as "Unknown Error".
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<ErrorsShape>,
}

/// The recognized shapes of the `errors` field.
///
/// Any other shape (a number, a map whose values are not lists, ...) fails
/// the parse and is reported as a decoding error rather than ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorsShape {
    Message(String),
    List(Vec<Value>),
    Fields(HashMap<String, Vec<Value>>),
}

/// Stringifies a JSON value the way it reads in an error message: strings
/// bare, everything else in its JSON rendering.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Inspects a completed response and normalizes failure bodies.
///
/// Returns `Ok(())` for any status in the 2xx range regardless of body
/// content. Otherwise returns the normalized error:
///
/// - a non-empty body that is not valid JSON (or whose `errors` field has an
///   unrecognized shape) becomes [`Error::Decoding`] carrying the raw body;
/// - status 429 becomes [`Error::RateLimit`] with the `Retry-After` header
///   value truncated to whole seconds (0 when absent or unparsable);
/// - status 406 forces the message to `"Not acceptable"`.
pub(crate) fn check_response(
    status: u16,
    retry_after: Option<&str>,
    body: &[u8],
) -> Result<(), Error> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    // An empty body still produces an error; the status alone may drive the
    // message via the specializations below.
    let envelope = if body.is_empty() {
        ErrorEnvelope {
            error: None,
            errors: None,
        }
    } else {
        serde_json::from_slice(body).map_err(|e| ResponseDecodingError {
            body: body.to_vec(),
            message: e.to_string(),
            status,
        })?
    };

    let mut error = ResponseError {
        status,
        message: envelope.error.unwrap_or_default(),
        errors: Vec::new(),
    };

    match envelope.errors {
        None => {}
        Some(ErrorsShape::Message(message)) => {
            error.message = message;
        }
        Some(ErrorsShape::List(entries)) => {
            error.errors = entries.iter().map(stringify).collect();
            error.message = error.errors.join(", ");
        }
        Some(ErrorsShape::Fields(fields)) => {
            // Map iteration order is unspecified; the first composed entry
            // only becomes the message when no flat message was present.
            for (field, entries) in &fields {
                for entry in entries {
                    let composed = format!("{field}: {}", stringify(entry));
                    if error.message.is_empty() {
                        error.message.clone_from(&composed);
                    }
                    error.errors.push(composed);
                }
            }
        }
    }

    Err(specialize(status, retry_after, error))
}

/// Applies status-specific error specializations.
fn specialize(status: u16, retry_after: Option<&str>, mut error: ResponseError) -> Error {
    if status == 429 {
        let seconds = retry_after
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|f| f.is_finite() && f.is_sign_positive())
            .map_or(0, |f| f.trunc() as u64);
        return Error::RateLimit(RateLimitError {
            response: error,
            retry_after: seconds,
        });
    }
    if status == 406 {
        error.message = "Not acceptable".to_string();
    }
    Error::Response(error)
}
