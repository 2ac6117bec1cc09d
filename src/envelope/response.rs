use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Error, Result};

pub const STATUS_OK: &str = "OK";

/// Response envelope, generic over the `data` payload.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    #[serde(default)]
    pub status: String,
    #[serde(rename = "statusCode", default, deserialize_with = "status_code")]
    pub status_code: String,
    #[serde(default, deserialize_with = "messages")]
    pub messages: Option<Messages>,
    pub data: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub error: Option<Vec<String>>,
}

impl<T> Response<T> {
    /// `data` when the vendor answered `"OK"`, otherwise the vendor's
    /// error messages joined by `"; "`, falling back to the status code.
    pub fn into_result(self) -> Result<Option<T>> {
        if self.status == STATUS_OK {
            return Ok(self.data);
        }

        let errors = self
            .messages
            .and_then(|messages| messages.error)
            .unwrap_or_default();

        let message = if errors.is_empty() {
            format!("Error: {}", self.status_code)
        } else {
            errors.join("; ")
        };

        Err(Error::Api {
            message,
            status_code: self.status_code,
        })
    }
}

// The code is documented as a string but numbers show up too.
fn status_code<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid statusCode {other}"))),
    }
}

// An empty `messages` comes back as `[]` rather than `{}`.
fn messages<'de, D>(deserializer: D) -> std::result::Result<Option<Messages>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Product {
        product_id: u64,
    }

    fn parse(raw: &str) -> Result<Option<Product>> {
        serde_json::from_str::<Response<Product>>(raw)
            .map_err(Error::Decode)?
            .into_result()
    }

    #[test]
    fn ok_returns_data() {
        let data = parse(r#"{"status":"OK","data":{"product_id":42}}"#).unwrap();
        assert_eq!(data, Some(Product { product_id: 42 }));
    }

    #[test]
    fn ok_without_data_is_none() {
        assert_eq!(parse(r#"{"status":"OK","statusCode":200}"#).unwrap(), None);
    }

    #[test]
    fn error_messages_are_joined() {
        let err = parse(
            r#"{"status":"ERROR","statusCode":"4001","messages":{"error":["Invalid id","Not found"]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid id; Not found");
        assert!(matches!(err, Error::Api { ref status_code, .. } if status_code == "4001"));
    }

    #[test]
    fn status_code_is_the_fallback() {
        let err = parse(r#"{"status":"ERROR","statusCode":"5000"}"#).unwrap_err();
        assert!(err.is_semantic());
        assert!(err.to_string().contains("5000"));
    }

    #[test]
    fn empty_message_list_falls_back_to_status_code() {
        let err = parse(r#"{"status":"ERROR","statusCode":404,"messages":{"error":[]}}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: 404");
    }

    #[test]
    fn array_messages_are_ignored() {
        let response: Response<Value> =
            serde_json::from_value(json!({"status":"OK","messages":[],"data":[]})).unwrap();
        assert!(response.messages.is_none());
        assert_eq!(response.into_result().unwrap(), Some(json!([])));
    }

    #[test]
    fn payload_mismatch_is_a_decode_error() {
        let err = parse(r#"{"status":"OK","data":{"product_id":"abc"}}"#).unwrap_err();
        assert!(err.is_format());
    }
}
