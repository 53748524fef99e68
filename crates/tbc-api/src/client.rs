use std::sync::Arc;

use tbc_core::{ClientConfig, Dispatcher, HttpTransport, Result};

use crate::types::File;

/// Typed Bot API client.
///
/// Cheap to clone; clones share one HTTP transport. Each call is
/// independent, so a client can be used from many tasks at once.
#[derive(Clone, Debug)]
pub struct BotClient {
    pub(crate) dispatcher: Dispatcher,
}

impl BotClient {
    /// Client for the public Bot API server with default timeouts.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(token))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = Arc::new(config.http_client()?);
        let dispatcher = Dispatcher::new(transport, &config.api_url, config.token.clone())?
            .with_timeout(config.request_timeout);
        Ok(Self { dispatcher })
    }

    /// Reads `TELEGRAM_*` variables, see [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env()?)
    }

    /// Client over a custom transport, e.g. a fake in tests.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        api_url: &str,
        token: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            dispatcher: Dispatcher::new(transport, api_url, token)?,
        })
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Download URL of a file returned by `get_file`. `None` until the
    /// server has assigned a `file_path`.
    pub fn file_url(&self, file: &File) -> Option<String> {
        file.file_path
            .as_deref()
            .map(|path| self.dispatcher.file_endpoint(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbc_core::Error;

    #[test]
    fn empty_token_is_a_config_error() {
        assert!(matches!(BotClient::new(""), Err(Error::Config(_))));
    }

    #[test]
    fn file_url_needs_a_path() {
        let client = BotClient::from_config(
            &ClientConfig::new("42:xyz").with_api_url("http://127.0.0.1:8081/"),
        )
        .unwrap();
        let mut file = File {
            file_id: "id".to_string(),
            file_unique_id: "u".to_string(),
            file_size: None,
            file_path: None,
        };
        assert_eq!(client.file_url(&file), None);

        file.file_path = Some("documents/file_3.pdf".to_string());
        assert_eq!(
            client.file_url(&file).as_deref(),
            Some("http://127.0.0.1:8081/file/bot42:xyz/documents/file_3.pdf")
        );
    }
}
