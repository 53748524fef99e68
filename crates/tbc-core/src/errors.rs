use std::{fmt, time::Duration};

use crate::envelope::ResponseParameters;

/// Error type shared by every Bot API call.
///
/// Transport and decode failures are propagated verbatim. `Api` is the only
/// variant produced by the remote side itself (`"ok": false`).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    /// The API error, if the server answered with `"ok": false`.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Server-suggested delay before retrying, if this is a rate-limit error.
    pub fn retry_after(&self) -> Option<Duration> {
        self.as_api().and_then(ApiError::retry_after)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// A failed call as reported by the Bot API envelope.
///
/// `request_url` never contains the bot token; it is redacted before the
/// error is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub error_code: i64,
    pub description: String,
    pub request_url: String,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    pub fn retry_after(&self) -> Option<Duration> {
        self.parameters
            .as_ref()
            .and_then(|p| p.retry_after)
            .map(Duration::from_secs)
    }

    /// The supergroup id a migrated group chat moved to.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {} {}",
            self.request_url, self.error_code, self.description
        )
    }
}

impl std::error::Error for ApiError {}
