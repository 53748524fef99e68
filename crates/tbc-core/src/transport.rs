//! Request construction and dispatch.
//!
//! Requests and responses are plain data so any [`HttpTransport`] can execute
//! them; `reqwest::Client` is the production implementation, tests plug in
//! fakes or point the client at a mock server.

use std::{fmt, sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, multipart::Form, Method};
use serde::{de::DeserializeOwned, Serialize};
use tokio_util::sync::CancellationToken;

use crate::{
    envelope,
    errors::Error,
    logging,
    multipart::{build_form, Attachment},
    Result,
};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(Form),
}

impl RequestBody {
    fn kind(&self) -> &'static str {
        match self {
            RequestBody::Empty => "empty",
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Json(b) => f
                .debug_tuple("Json")
                .field(&String::from_utf8_lossy(b))
                .finish(),
            other => f.write_str(other.kind()),
        }
    }
}

/// One Bot API call, described as data.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

/// Raw reply handed to the envelope decoder.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Executes one HTTP request. Implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
        let builder = self.request(req.method, req.url);
        let builder = match req.body {
            RequestBody::Empty => builder,
            RequestBody::Json(b) => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(b),
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Builds Bot API requests for one token and runs them through a transport.
///
/// Stateless between calls; clones share the transport.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    api_url: String,
    token: String,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        api_url: &str,
        token: impl Into<String>,
    ) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Config("bot token cannot be empty".to_string()));
        }
        let api_url = api_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&api_url)
            .map_err(|e| Error::Config(format!("invalid api url {api_url}: {e}")))?;
        Ok(Self {
            transport,
            api_url,
            token,
            timeout: None,
        })
    }

    /// Client-side limit for one call; `None` waits for the transport.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// `<api_url>/bot<token>/<operation>`.
    pub fn endpoint(&self, operation: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, operation)
    }

    /// Same as [`Dispatcher::endpoint`] with the token masked; used in errors.
    pub fn redacted_endpoint(&self, operation: &str) -> String {
        format!("{}/bot<redacted>/{}", self.api_url, operation)
    }

    /// Download URL for a `file_path` returned by `getFile`.
    pub fn file_endpoint(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.api_url,
            self.token,
            file_path.trim_start_matches('/')
        )
    }

    pub fn json_request<P: Serialize + ?Sized>(
        &self,
        operation: &str,
        payload: &P,
    ) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: Method::POST,
            url: self.endpoint(operation),
            body: RequestBody::Json(serde_json::to_vec(payload)?),
        })
    }

    pub fn multipart_request<P: Serialize + ?Sized>(
        &self,
        operation: &str,
        payload: &P,
        attachments: Vec<Attachment>,
    ) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: Method::POST,
            url: self.endpoint(operation),
            body: RequestBody::Multipart(build_form(payload, attachments)?),
        })
    }

    /// GET with no body, for read-only calls without parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        operation: &str,
    ) -> Result<T> {
        let req = HttpRequest {
            method: Method::GET,
            url: self.endpoint(operation),
            body: RequestBody::Empty,
        };
        self.call(ctx, operation, req).await
    }

    /// POST with no body whose result is not inspected.
    pub async fn post_ignored(&self, ctx: &CancellationToken, operation: &str) -> Result<()> {
        let req = HttpRequest {
            method: Method::POST,
            url: self.endpoint(operation),
            body: RequestBody::Empty,
        };
        let resp = self.execute(ctx, operation, req).await?;
        envelope::decode_ignored(&resp.body, &self.redacted_endpoint(operation))
    }

    pub async fn post<T, P>(&self, ctx: &CancellationToken, operation: &str, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let req = self.json_request(operation, payload)?;
        self.call(ctx, operation, req).await
    }

    /// POST as multipart when there is anything to upload, JSON otherwise.
    pub async fn post_with_uploads<T, P>(
        &self,
        ctx: &CancellationToken,
        operation: &str,
        payload: &P,
        attachments: Vec<Attachment>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let req = if attachments.is_empty() {
            self.json_request(operation, payload)?
        } else {
            self.multipart_request(operation, payload, attachments)?
        };
        self.call(ctx, operation, req).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        ctx: &CancellationToken,
        operation: &str,
        req: HttpRequest,
    ) -> Result<T> {
        let resp = self.execute(ctx, operation, req).await?;
        envelope::decode(&resp.body, &self.redacted_endpoint(operation))
    }

    /// Run one request, honoring the caller's token and the client timeout.
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub async fn execute(
        &self,
        ctx: &CancellationToken,
        operation: &str,
        req: HttpRequest,
    ) -> Result<HttpResponse> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }
        logging::debug!(
            operation,
            method = %req.method,
            body = req.body.kind(),
            "dispatching bot api call"
        );

        let send = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, self.transport.send(req))
                    .await
                    .map_err(|_| Error::Timeout(limit))?,
                None => self.transport.send(req).await,
            }
        };

        let result = tokio::select! {
            biased;
            _ = ctx.cancelled() => Err(Error::Cancelled),
            r = send => r,
        };

        match result {
            // The transport may notice the cancellation first and fail on its own.
            Err(_) if ctx.is_cancelled() => Err(Error::Cancelled),
            other => other,
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multipart::InputFile;
    use serde::Deserialize;
    use std::sync::Mutex;

    /// Records requests and replies with a canned body.
    struct FakeTransport {
        reply: &'static str,
        seen: Mutex<Vec<(Method, String, String)>>,
    }

    impl FakeTransport {
        fn new(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for FakeTransport {
        async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
            let body = match &req.body {
                RequestBody::Json(b) => String::from_utf8(b.clone()).unwrap(),
                other => other.kind().to_string(),
            };
            self.seen.lock().unwrap().push((req.method, req.url, body));
            Ok(HttpResponse {
                status: 200,
                body: Bytes::from_static(self.reply.as_bytes()),
            })
        }
    }

    /// Never answers.
    struct HangingTransport;

    #[async_trait]
    impl HttpTransport for HangingTransport {
        async fn send(&self, _req: HttpRequest) -> Result<HttpResponse> {
            std::future::pending().await
        }
    }

    #[derive(Serialize)]
    struct Opts {
        chat_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Msg {
        message_id: i64,
    }

    fn dispatcher(t: Arc<dyn HttpTransport>) -> Dispatcher {
        Dispatcher::new(t, "https://api.example.org/", "123:abc").unwrap()
    }

    #[test]
    fn rejects_empty_token_and_bad_url() {
        let t: Arc<dyn HttpTransport> = Arc::new(HangingTransport);
        assert!(matches!(
            Dispatcher::new(t.clone(), DEFAULT_API_URL, "  "),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Dispatcher::new(t, "not a url", "123:abc"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn endpoint_and_redaction() {
        let d = dispatcher(Arc::new(HangingTransport));
        assert_eq!(d.endpoint("getMe"), "https://api.example.org/bot123:abc/getMe");
        assert_eq!(
            d.redacted_endpoint("getMe"),
            "https://api.example.org/bot<redacted>/getMe"
        );
        assert_eq!(
            d.file_endpoint("photos/file_1.jpg"),
            "https://api.example.org/file/bot123:abc/photos/file_1.jpg"
        );
        assert!(!format!("{d:?}").contains("123:abc"));
    }

    #[tokio::test]
    async fn post_sends_json_and_decodes() {
        let fake = FakeTransport::new(r#"{"ok":true,"result":{"message_id":7}}"#);
        let d = dispatcher(fake.clone());
        let msg: Msg = d
            .post(
                &CancellationToken::new(),
                "sendMessage",
                &Opts {
                    chat_id: 42,
                    text: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(msg, Msg { message_id: 7 });

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen[0].0, Method::POST);
        assert_eq!(seen[0].1, "https://api.example.org/bot123:abc/sendMessage");
        assert_eq!(seen[0].2, r#"{"chat_id":42}"#);
    }

    #[tokio::test]
    async fn uploads_switch_to_multipart() {
        let fake = FakeTransport::new(r#"{"ok":true,"result":{"message_id":1}}"#);
        let d = dispatcher(fake.clone());
        let ctx = CancellationToken::new();
        let opts = Opts {
            chat_id: 1,
            text: Some("x".to_string()),
        };

        let _: Msg = d.post_with_uploads(&ctx, "sendPhoto", &opts, vec![]).await.unwrap();
        let file = InputFile::from_bytes("a.jpg", &b"jpeg"[..]);
        let _: Msg = d
            .post_with_uploads(&ctx, "sendPhoto", &opts, vec![Attachment::new("photo", file)])
            .await
            .unwrap();

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen[0].2, r#"{"chat_id":1,"text":"x"}"#);
        assert_eq!(seen[1].2, "multipart");
    }

    #[tokio::test]
    async fn get_and_ignored_calls() {
        let fake = FakeTransport::new(r#"{"ok":true,"result":true}"#);
        let d = dispatcher(fake.clone());
        let ctx = CancellationToken::new();
        let ok: bool = d.get(&ctx, "getWebhookInfo").await.unwrap();
        assert!(ok);
        d.post_ignored(&ctx, "close").await.unwrap();

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen[0].0, Method::GET);
        assert_eq!(seen[0].2, "empty");
        assert_eq!(seen[1].0, Method::POST);
    }

    #[tokio::test]
    async fn api_error_carries_redacted_url() {
        let fake = FakeTransport::new(r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#);
        let d = dispatcher(fake);
        let err = d.get::<bool>(&CancellationToken::new(), "getMe").await.unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.error_code, 401);
        assert_eq!(api.request_url, "https://api.example.org/bot<redacted>/getMe");
    }

    #[tokio::test]
    async fn cancellation_wins_over_a_hanging_transport() {
        let d = dispatcher(Arc::new(HangingTransport));
        let ctx = CancellationToken::new();
        let trigger = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });
        let err = d.get::<bool>(&ctx, "getMe").await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[tokio::test]
    async fn already_cancelled_token_short_circuits() {
        let fake = FakeTransport::new(r#"{"ok":true,"result":true}"#);
        let d = dispatcher(fake.clone());
        let ctx = CancellationToken::new();
        ctx.cancel();
        assert!(matches!(d.get::<bool>(&ctx, "getMe").await, Err(Error::Cancelled)));
        assert!(fake.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn timeout_is_reported_as_timeout() {
        let d = dispatcher(Arc::new(HangingTransport)).with_timeout(Some(Duration::from_millis(10)));
        let err = d.get::<bool>(&CancellationToken::new(), "getMe").await.unwrap_err();
        assert!(matches!(err, Error::Timeout(d) if d == Duration::from_millis(10)));
    }
}
