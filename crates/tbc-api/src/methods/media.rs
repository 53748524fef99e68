//! File-bearing messages.
//!
//! The primary file can be referenced by `file_id` or URL in the options, or
//! uploaded by passing an [`InputFile`]. An upload replaces the reference and
//! switches the request to multipart; thumbnails can only be uploaded.

use serde::Serialize;
use tbc_core::{InputFile, Result};
use tokio_util::sync::CancellationToken;

use super::{attachments, named_attachments, SendOptions};
use crate::{
    types::{ChatId, File, InputMedia, Message, MessageEntity, ParseMode, UserProfilePhotos},
    BotClient,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    /// File id or HTTP URL; ignored when a photo is uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendPhoto {
    pub fn new(chat_id: impl Into<ChatId>, photo: impl Into<String>) -> Self {
        Self {
            photo: Some(photo.into()),
            ..Self::upload(chat_id)
        }
    }

    /// Options for a photo passed as an upload.
    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            photo: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendAudio {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendAudio {
    pub fn new(chat_id: impl Into<ChatId>, audio: impl Into<String>) -> Self {
        Self {
            audio: Some(audio.into()),
            ..Self::upload(chat_id)
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            audio: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            performer: None,
            title: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_content_type_detection: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendDocument {
    pub fn new(chat_id: impl Into<ChatId>, document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            ..Self::upload(chat_id)
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            document: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVideo {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_streaming: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendVideo {
    pub fn new(chat_id: impl Into<ChatId>, video: impl Into<String>) -> Self {
        Self {
            video: Some(video.into()),
            ..Self::upload(chat_id)
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            video: None,
            duration: None,
            width: None,
            height: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            supports_streaming: None,
            send: SendOptions::default(),
        }
    }
}

/// GIF or soundless H.264/MPEG-4 video.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendAnimation {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendAnimation {
    pub fn new(chat_id: impl Into<ChatId>, animation: impl Into<String>) -> Self {
        Self {
            animation: Some(animation.into()),
            ..Self::upload(chat_id)
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            animation: None,
            duration: None,
            width: None,
            height: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            send: SendOptions::default(),
        }
    }
}

/// OGG/OPUS voice note.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVoice {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendVoice {
    pub fn new(chat_id: impl Into<ChatId>, voice: impl Into<String>) -> Self {
        Self {
            voice: Some(voice.into()),
            ..Self::upload(chat_id)
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            voice: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            send: SendOptions::default(),
        }
    }
}

/// Round video message. Sending by URL is not supported by the API.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVideoNote {
    pub chat_id: ChatId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Diameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendVideoNote {
    pub fn new(chat_id: impl Into<ChatId>, video_note: impl Into<String>) -> Self {
        Self {
            video_note: Some(video_note.into()),
            ..Self::upload(chat_id)
        }
    }

    pub fn upload(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            video_note: None,
            duration: None,
            length: None,
            send: SendOptions::default(),
        }
    }
}

/// An album of 2-10 items. Uploaded items are referenced from `media` with
/// [`InputFile::attach_uri`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMediaGroup {
    pub chat_id: ChatId,
    pub media: Vec<InputMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
}

impl SendMediaGroup {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Self {
        Self {
            chat_id: chat_id.into(),
            media,
            disable_notification: None,
            reply_to_message_id: None,
            allow_sending_without_reply: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// 1..=100, server default 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GetUserProfilePhotos {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            offset: None,
            limit: None,
        }
    }
}

impl BotClient {
    pub async fn send_photo(
        &self,
        ctx: &CancellationToken,
        opts: &SendPhoto,
        photo: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("photo", photo)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendPhoto", opts, files)
            .await
    }

    pub async fn send_audio(
        &self,
        ctx: &CancellationToken,
        opts: &SendAudio,
        audio: Option<InputFile>,
        thumb: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("audio", audio), ("thumb", thumb)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendAudio", opts, files)
            .await
    }

    pub async fn send_document(
        &self,
        ctx: &CancellationToken,
        opts: &SendDocument,
        document: Option<InputFile>,
        thumb: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("document", document), ("thumb", thumb)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendDocument", opts, files)
            .await
    }

    pub async fn send_video(
        &self,
        ctx: &CancellationToken,
        opts: &SendVideo,
        video: Option<InputFile>,
        thumb: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("video", video), ("thumb", thumb)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendVideo", opts, files)
            .await
    }

    pub async fn send_animation(
        &self,
        ctx: &CancellationToken,
        opts: &SendAnimation,
        animation: Option<InputFile>,
        thumb: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("animation", animation), ("thumb", thumb)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendAnimation", opts, files)
            .await
    }

    pub async fn send_voice(
        &self,
        ctx: &CancellationToken,
        opts: &SendVoice,
        voice: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("voice", voice)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendVoice", opts, files)
            .await
    }

    pub async fn send_video_note(
        &self,
        ctx: &CancellationToken,
        opts: &SendVideoNote,
        video_note: Option<InputFile>,
        thumb: Option<InputFile>,
    ) -> Result<Message> {
        let files = attachments([("video_note", video_note), ("thumb", thumb)]);
        self.dispatcher
            .post_with_uploads(ctx, "sendVideoNote", opts, files)
            .await
    }

    /// `files` are attached under their own names; an item in `opts.media`
    /// picks one up with `attach://<name>`.
    pub async fn send_media_group(
        &self,
        ctx: &CancellationToken,
        opts: &SendMediaGroup,
        files: Vec<InputFile>,
    ) -> Result<Vec<Message>> {
        self.dispatcher
            .post_with_uploads(ctx, "sendMediaGroup", opts, named_attachments(files))
            .await
    }

    /// Resolve a file id to a downloadable [`File`]; see [`BotClient::file_url`].
    pub async fn get_file(&self, ctx: &CancellationToken, opts: &GetFile) -> Result<File> {
        self.dispatcher.post(ctx, "getFile", opts).await
    }

    pub async fn get_user_profile_photos(
        &self,
        ctx: &CancellationToken,
        opts: &GetUserProfilePhotos,
    ) -> Result<UserProfilePhotos> {
        self.dispatcher.post(ctx, "getUserProfilePhotos", opts).await
    }
}
