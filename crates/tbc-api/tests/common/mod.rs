//! Shared helpers for tests that talk to a mockito Bot API server.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tbc_api::{BotClient, ClientConfig};

pub const TOKEN: &str = "123456:test-token";

pub fn path(operation: &str) -> String {
    format!("/bot{TOKEN}/{operation}")
}

pub fn client(server: &mockito::ServerGuard) -> BotClient {
    BotClient::from_config(&ClientConfig::new(TOKEN).with_api_url(server.url()))
        .expect("client for mock server")
}

/// Request bodies seen by a mock, in arrival order.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<String>>>);

impl Captured {
    pub fn bodies(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> String {
        self.bodies().pop().expect("no request captured")
    }
}

/// Mock `operation` to reply with `reply` and record every request body.
pub async fn capture(
    server: &mut mockito::ServerGuard,
    operation: &str,
    reply: &'static str,
) -> (mockito::Mock, Captured) {
    let captured = Captured::default();
    let sink = captured.clone();
    let mock = server
        .mock("POST", path(operation).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body_from_request(move |req| {
            let body = req.body().map(|b| String::from_utf8_lossy(b).into_owned());
            sink.0.lock().unwrap().push(body.unwrap_or_default());
            reply.as_bytes().to_vec()
        })
        .create_async()
        .await;
    (mock, captured)
}

/// A multipart form part as seen on the wire.
#[derive(Debug, PartialEq)]
pub struct FormPart {
    pub name: String,
    pub filename: Option<String>,
    pub value: String,
}

/// Split a multipart body into its parts. Good enough for text fields and
/// small text-like uploads.
pub fn multipart_parts(body: &str) -> Vec<FormPart> {
    let boundary = body
        .lines()
        .next()
        .expect("empty multipart body")
        .trim_end()
        .to_string();
    body.split(boundary.as_str())
        .filter_map(|chunk| {
            let (head, value) = chunk.split_once("\r\n\r\n")?;
            let name = attr(head, "name")?;
            Some(FormPart {
                name,
                filename: attr(head, "filename"),
                value: value.trim_end_matches("\r\n").to_string(),
            })
        })
        .collect()
}

fn attr(head: &str, key: &str) -> Option<String> {
    let start = head.find(&format!(" {key}=\""))? + key.len() + 3;
    let end = head[start..].find('"')? + start;
    Some(head[start..end].to_string())
}

pub fn text_part<'a>(parts: &'a [FormPart], name: &str) -> Option<&'a str> {
    parts
        .iter()
        .find(|p| p.name == name && p.filename.is_none())
        .map(|p| p.value.as_str())
}

pub const SENT_MESSAGE: &str = r#"{"ok":true,"result":{"message_id":7,"date":1706529600,"chat":{"id":42,"type":"private"},"text":"hello"}}"#;
