//! Upload handles and multipart form encoding.
//!
//! Text fields are derived from the same serde serialization as the JSON body,
//! so a field that is omitted from one encoding is omitted from the other.

use std::{fmt, path::Path};

use bytes::Bytes;
use reqwest::{
    multipart::{Form, Part},
    Body,
};
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;

use crate::{errors::Error, Result};

enum InputSource {
    Bytes(Bytes),
    Reader(Box<dyn AsyncRead + Send + Sync + Unpin>),
}

/// A local file to be sent as a multipart attachment.
///
/// Reader-backed files are streamed into the request body; a read error
/// aborts the body and fails the call.
pub struct InputFile {
    name: String,
    source: InputSource,
}

impl InputFile {
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            source: InputSource::Bytes(bytes.into()),
        }
    }

    pub fn from_reader<R>(name: impl Into<String>, reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + Unpin + 'static,
    {
        Self {
            name: name.into(),
            source: InputSource::Reader(Box::new(reader)),
        }
    }

    /// Open a file on disk; the attachment is named after its file name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Config(format!("not a file path: {}", path.display())))?
            .to_string();
        let file = tokio::fs::File::open(path).await?;
        Ok(Self::from_reader(name, file))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `attach://<name>`, used to reference this file from JSON-encoded fields
    /// such as media group items.
    pub fn attach_uri(&self) -> String {
        format!("attach://{}", self.name)
    }

    fn into_part(self) -> Part {
        let part = match self.source {
            InputSource::Bytes(b) => {
                let len = b.len() as u64;
                Part::stream_with_length(Body::from(b), len)
            }
            InputSource::Reader(r) => Part::stream(Body::wrap_stream(ReaderStream::new(r))),
        };
        part.file_name(self.name)
    }
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            InputSource::Bytes(b) => format!("{} bytes", b.len()),
            InputSource::Reader(_) => "reader".to_string(),
        };
        f.debug_struct("InputFile")
            .field("name", &self.name)
            .field("source", &source)
            .finish()
    }
}

/// An upload bound to the form field it is sent under (`photo`, `thumb`, ...).
#[derive(Debug)]
pub struct Attachment {
    pub field: String,
    pub file: InputFile,
    by_name: bool,
}

impl Attachment {
    pub fn new(field: impl Into<String>, file: InputFile) -> Self {
        Self {
            field: field.into(),
            file,
            by_name: false,
        }
    }

    /// Attach under the file's own name (media groups reference it via `attach://`).
    pub fn by_name(file: InputFile) -> Self {
        Self {
            field: file.name.clone(),
            file,
            by_name: true,
        }
    }
}

/// Flatten an options payload into multipart text fields.
///
/// Strings are written verbatim; every other value is written as its JSON
/// encoding so nested objects survive as JSON strings. `null` values are
/// dropped, matching the omit-on-unset rule of the JSON body.
pub fn form_fields<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<(String, String)>> {
    let map = match serde_json::to_value(payload)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(Error::Json(serde::ser::Error::custom(format!(
                "options payload must serialize to an object, got {other}"
            ))))
        }
    };

    let mut fields = Vec::with_capacity(map.len());
    for (name, value) in map {
        let encoded = match value {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        fields.push((name, encoded));
    }
    Ok(fields)
}

/// Build a multipart form from an options payload plus its attachments.
///
/// A text field sharing its name with a role attachment is dropped: the upload
/// replaces the file reference. A file attached by its own name must not
/// shadow a payload field.
pub fn build_form<P: Serialize + ?Sized>(payload: &P, attachments: Vec<Attachment>) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in form_fields(payload)? {
        match attachments.iter().find(|a| a.field == name) {
            Some(a) if a.by_name => {
                return Err(Error::Config(format!(
                    "attachment name `{name}` collides with an options field"
                )))
            }
            Some(_) => continue,
            None => form = form.text(name, value),
        }
    }
    for a in attachments {
        form = form.part(a.field, a.file.into_part());
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default)]
    struct Opts {
        chat_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        disable_notification: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reply_markup: Option<Value>,
    }

    fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn unset_fields_are_not_emitted() {
        let fields = form_fields(&Opts {
            chat_id: 42,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(fields, vec![("chat_id".to_string(), "42".to_string())]);
    }

    #[test]
    fn explicit_zero_values_are_emitted() {
        let fields = form_fields(&Opts {
            chat_id: 0,
            caption: Some(String::new()),
            disable_notification: Some(false),
            reply_markup: None,
        })
        .unwrap();
        assert_eq!(field(&fields, "chat_id"), Some("0"));
        assert_eq!(field(&fields, "caption"), Some(""));
        assert_eq!(field(&fields, "disable_notification"), Some("false"));
    }

    #[test]
    fn nested_values_are_json_encoded() {
        let markup = json!({"inline_keyboard": [[{"text": "a", "callback_data": "b"}]]});
        let fields = form_fields(&Opts {
            chat_id: 1,
            caption: Some("hi \"there\"".to_string()),
            reply_markup: Some(markup.clone()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(field(&fields, "caption"), Some("hi \"there\""));
        let decoded: Value = serde_json::from_str(field(&fields, "reply_markup").unwrap()).unwrap();
        assert_eq!(decoded, markup);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(matches!(form_fields(&[1, 2, 3]), Err(Error::Json(_))));
        assert!(form_fields(&()).unwrap().is_empty());
    }

    #[test]
    fn attach_uri_and_field_naming() {
        let file = InputFile::from_bytes("cat.jpg", &b"jpeg"[..]);
        assert_eq!(file.attach_uri(), "attach://cat.jpg");
        let a = Attachment::by_name(file);
        assert_eq!(a.field, "cat.jpg");
        let b = Attachment::new("thumb", InputFile::from_reader("t.jpg", &b"x"[..]));
        assert_eq!(b.field, "thumb");
        assert_eq!(b.file.name(), "t.jpg");
    }

    #[test]
    fn upload_replaces_file_reference_under_its_role() {
        #[derive(Serialize)]
        struct Photo {
            chat_id: i64,
            photo: &'static str,
        }
        let attachments = vec![Attachment::new(
            "photo",
            InputFile::from_bytes("a.jpg", &b"jpg"[..]),
        )];
        assert!(build_form(&Photo { chat_id: 1, photo: "AgAD" }, attachments).is_ok());
    }

    #[test]
    fn named_attachment_cannot_shadow_a_field() {
        #[derive(Serialize)]
        struct Group {
            chat_id: i64,
            media: &'static str,
        }
        let payload = Group {
            chat_id: 1,
            media: "[]",
        };

        for name in ["media", "chat_id"] {
            let attachments = vec![Attachment::by_name(InputFile::from_bytes(name, &b"x"[..]))];
            let err = build_form(&payload, attachments).unwrap_err();
            assert!(matches!(err, Error::Config(ref msg) if msg.contains(name)), "got {err:?}");
        }

        let attachments = vec![Attachment::by_name(InputFile::from_bytes("a.jpg", &b"x"[..]))];
        assert!(build_form(&payload, attachments).is_ok());
    }

    #[tokio::test]
    async fn from_path_uses_the_file_name() {
        let dir = std::env::temp_dir().join(format!("tbc-core-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("voice.ogg");
        tokio::fs::write(&path, b"OggS").await.unwrap();

        let file = InputFile::from_path(&path).await.unwrap();
        assert_eq!(file.name(), "voice.ogg");

        let missing = InputFile::from_path(dir.join("missing.ogg")).await;
        assert!(matches!(missing, Err(Error::Io(_))));
        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
