use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;

/// Body accepted by `POST /tickets`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTicketRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Body accepted by `POST /tickets/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitTicketRequest {
    /// Passed through as-is; it is not checked against stored records
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticket_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default = "default_priority", deserialize_with = "null_as_priority")]
    pub priority: String,
}

impl Default for SubmitTicketRequest {
    fn default() -> Self {
        Self {
            ticket_id: String::new(),
            title: String::new(),
            description: String::new(),
            priority: default_priority(),
        }
    }
}

fn default_priority() -> String {
    "medium".to_string()
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_priority<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_priority))
}

/// Parses a request body that is either a JSON object or a JSON string
/// holding an encoded object. Empty bodies and `null` yield `T::default()`.
pub fn parse_body<T>(bytes: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::InvalidBody(format!("body is not valid JSON: {e}")))?;

    let value = match value {
        Value::String(encoded) => {
            debug!("Decoding string-encoded request body");
            if encoded.trim().is_empty() {
                return Ok(T::default());
            }
            serde_json::from_str(&encoded).map_err(|e| {
                AppError::InvalidBody(format!("encoded body is not valid JSON: {e}"))
            })?
        }
        other => other,
    };

    match value {
        Value::Null => Ok(T::default()),
        Value::Object(_) => serde_path_to_error::deserialize(value)
            .map_err(|e| AppError::InvalidBody(format!("invalid field `{}`: {}", e.path(), e.inner()))),
        _ => Err(AppError::InvalidBody(
            "request body must be a JSON object".to_string(),
        )),
    }
}
