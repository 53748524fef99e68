//! Response envelope shared by every Bot API reply.
//!
//! Telegram wraps each result as `{"ok": true, "result": ...}` or
//! `{"ok": false, "error_code": ..., "description": ..., "parameters": ...}`.
//! Classification happens here once so that operation methods stay one-liners.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{errors::ApiError, Result};

/// Extra hints attached to some failures (rate limits, group migration).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

impl ApiResponse {
    pub fn parse(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Split the envelope into the raw result or a typed API error.
    ///
    /// An `ok` envelope without `result` yields `null`.
    pub fn into_result(self, request_url: &str) -> Result<Value> {
        if !self.ok {
            return Err(ApiError {
                error_code: self.error_code.unwrap_or_default(),
                description: self.description.unwrap_or_default(),
                request_url: request_url.to_string(),
                parameters: self.parameters,
            }
            .into());
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// Decode a reply body into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8], request_url: &str) -> Result<T> {
    let raw = ApiResponse::parse(body)?.into_result(request_url)?;
    Ok(serde_json::from_value(raw)?)
}

/// Classify a reply body without looking at `result`.
pub fn decode_ignored(body: &[u8], request_url: &str) -> Result<()> {
    ApiResponse::parse(body)?.into_result(request_url).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const URL: &str = "https://api.telegram.org/bot<redacted>/getMe";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        id: i64,
        name: String,
    }

    #[test]
    fn ok_envelope_decodes_result() {
        let body = br#"{"ok":true,"result":{"id":7,"name":"x"}}"#;
        let got: Probe = decode(body, URL).unwrap();
        assert_eq!(
            got,
            Probe {
                id: 7,
                name: "x".to_string()
            }
        );
    }

    #[test]
    fn failed_envelope_becomes_api_error() {
        let body = br#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":5}}"#;
        let err = decode::<Probe>(body, URL).unwrap_err();
        let api = match err {
            Error::Api(api) => api,
            other => panic!("expected api error, got {other:?}"),
        };
        assert_eq!(api.error_code, 429);
        assert_eq!(api.description, "Too Many Requests");
        assert_eq!(api.request_url, URL);
        assert_eq!(api.parameters.and_then(|p| p.retry_after), Some(5));
    }

    #[test]
    fn failed_envelope_wins_even_with_a_result() {
        let body = br#"{"ok":false,"result":true,"error_code":400,"description":"Bad Request"}"#;
        assert!(matches!(decode_ignored(body, URL), Err(Error::Api(_))));
    }

    #[test]
    fn migration_hint_is_kept() {
        let body = br#"{"ok":false,"error_code":400,"description":"migrated","parameters":{"migrate_to_chat_id":-100123}}"#;
        let err = decode_ignored(body, URL).unwrap_err();
        assert_eq!(err.as_api().and_then(|a| a.migrate_to_chat_id()), Some(-100123));
    }

    #[test]
    fn malformed_body_is_a_json_error() {
        let err = decode::<Probe>(b"<html>bad gateway</html>", URL).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn result_shape_mismatch_is_a_json_error() {
        let body = br#"{"ok":true,"result":{"id":"seven","name":"x"}}"#;
        assert!(matches!(decode::<Probe>(body, URL), Err(Error::Json(_))));
    }

    #[test]
    fn ignored_result_skips_shape_checks() {
        let body = br#"{"ok":true,"result":{"anything":[1,2,3]}}"#;
        assert!(decode_ignored(body, URL).is_ok());
    }

    #[test]
    fn missing_result_decodes_as_null() {
        let got: Option<bool> = decode(br#"{"ok":true}"#, URL).unwrap();
        assert_eq!(got, None);
    }
}
