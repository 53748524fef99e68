use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, transport::DEFAULT_API_URL, Result};

const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Typed configuration for a bot client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub token: String,
    /// Server root; requests go to `<api_url>/bot<token>/<operation>`.
    pub api_url: String,
    /// Upper bound for one call. `None` leaves timing to the caller's token.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Production transport honoring `connect_timeout`.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        Ok(reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .build()?)
    }

    /// Load from the environment, reading `.env` first when present.
    ///
    /// Existing variables are never overridden by `.env`.
    pub fn from_env() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = get("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let api_url = get("TELEGRAM_API_URL")
            .and_then(non_empty)
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout = parse_ms(&get, "TELEGRAM_REQUEST_TIMEOUT_MS")?;
        let connect_timeout = parse_ms(&get, "TELEGRAM_CONNECT_TIMEOUT_MS")?
            .unwrap_or(Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS));

        Ok(Self {
            token: token.trim().to_string(),
            api_url,
            request_timeout,
            connect_timeout,
        })
    }
}

fn parse_ms(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    let Some(raw) = get(key).and_then(non_empty) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|e| Error::Config(format!("{key} must be milliseconds: {e}")))
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, unquote(v.trim()));
    }
}

fn unquote(val: &str) -> &str {
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        &val[1..val.len() - 1]
    } else {
        val
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
