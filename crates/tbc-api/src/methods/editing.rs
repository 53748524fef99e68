use serde::Serialize;
use tbc_core::{InputFile, Result};
use tokio_util::sync::CancellationToken;

use super::named_attachments;
use crate::{
    types::{ChatId, EditedMessage, InlineKeyboardMarkup, InputMedia, MessageEntity, ParseMode},
    BotClient,
};

/// The message an edit applies to.
///
/// Flattened into the payload: `chat_id` + `message_id` for messages the bot
/// sent, `inline_message_id` for messages sent via inline mode. Edits of
/// inline messages return `true` instead of the message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageTarget {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline { inline_message_id: String },
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageText {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageText {
    pub fn new(target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageCaption {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// `None` removes the caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageCaption {
    pub fn new(target: MessageTarget, caption: impl Into<String>) -> Self {
        Self {
            target,
            caption: Some(caption.into()),
            parse_mode: None,
            caption_entities: None,
            reply_markup: None,
        }
    }
}

/// Replace the media of an album item or a single media message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageMedia {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub media: InputMedia,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageMedia {
    pub fn new(target: MessageTarget, media: InputMedia) -> Self {
        Self {
            target,
            media,
            reply_markup: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EditMessageReplyMarkup {
    #[serde(flatten)]
    pub target: MessageTarget,
    /// `None` removes the keyboard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageReplyMarkup {
    pub fn new(target: MessageTarget, reply_markup: Option<InlineKeyboardMarkup>) -> Self {
        Self {
            target,
            reply_markup,
        }
    }
}

impl BotClient {
    pub async fn edit_message_text(
        &self,
        ctx: &CancellationToken,
        opts: &EditMessageText,
    ) -> Result<EditedMessage> {
        self.dispatcher.post(ctx, "editMessageText", opts).await
    }

    pub async fn edit_message_caption(
        &self,
        ctx: &CancellationToken,
        opts: &EditMessageCaption,
    ) -> Result<EditedMessage> {
        self.dispatcher.post(ctx, "editMessageCaption", opts).await
    }

    /// `files` are referenced from `opts.media` by `attach://<name>`.
    pub async fn edit_message_media(
        &self,
        ctx: &CancellationToken,
        opts: &EditMessageMedia,
        files: Vec<InputFile>,
    ) -> Result<EditedMessage> {
        self.dispatcher
            .post_with_uploads(ctx, "editMessageMedia", opts, named_attachments(files))
            .await
    }

    pub async fn edit_message_reply_markup(
        &self,
        ctx: &CancellationToken,
        opts: &EditMessageReplyMarkup,
    ) -> Result<EditedMessage> {
        self.dispatcher
            .post(ctx, "editMessageReplyMarkup", opts)
            .await
    }
}
