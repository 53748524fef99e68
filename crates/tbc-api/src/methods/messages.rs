use serde::Serialize;
use tbc_core::Result;
use tokio_util::sync::CancellationToken;

use super::SendOptions;
use crate::{
    types::{ChatAction, ChatId, Message, MessageEntity, MessageId, ParseMode},
    BotClient,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            send: SendOptions::default(),
        }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl ForwardMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }
}

/// Like a forward, without the link to the original message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CopyMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: i64,
    /// Replaces the original caption; `Some("")` removes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_entities: Option<Vec<MessageEntity>>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl CopyMessage {
    pub fn new(chat_id: impl Into<ChatId>, from_chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            from_chat_id: from_chat_id.into(),
            message_id,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendDice {
    pub chat_id: ChatId,
    /// 🎲 when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendDice {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
            emoji: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl SendChatAction {
    pub fn new(chat_id: impl Into<ChatId>, action: ChatAction) -> Self {
        Self {
            chat_id: chat_id.into(),
            action,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendContact {
    pub fn new(
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
            vcard: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

impl BotClient {
    pub async fn send_message(&self, ctx: &CancellationToken, opts: &SendMessage) -> Result<Message> {
        self.dispatcher.post(ctx, "sendMessage", opts).await
    }

    pub async fn forward_message(
        &self,
        ctx: &CancellationToken,
        opts: &ForwardMessage,
    ) -> Result<Message> {
        self.dispatcher.post(ctx, "forwardMessage", opts).await
    }

    /// Returns only the id of the copy.
    pub async fn copy_message(
        &self,
        ctx: &CancellationToken,
        opts: &CopyMessage,
    ) -> Result<MessageId> {
        self.dispatcher.post(ctx, "copyMessage", opts).await
    }

    pub async fn send_dice(&self, ctx: &CancellationToken, opts: &SendDice) -> Result<Message> {
        self.dispatcher.post(ctx, "sendDice", opts).await
    }

    /// Shows the action for at most five seconds or until the next message.
    pub async fn send_chat_action(
        &self,
        ctx: &CancellationToken,
        opts: &SendChatAction,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "sendChatAction", opts).await
    }

    pub async fn send_contact(
        &self,
        ctx: &CancellationToken,
        opts: &SendContact,
    ) -> Result<Message> {
        self.dispatcher.post(ctx, "sendContact", opts).await
    }

    pub async fn delete_message(
        &self,
        ctx: &CancellationToken,
        opts: &DeleteMessage,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "deleteMessage", opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InlineKeyboardButton;
    use crate::types::InlineKeyboardMarkup;
    use serde_json::json;

    #[test]
    fn minimal_send_message_has_only_required_fields() {
        assert_eq!(
            serde_json::to_value(SendMessage::new(42, "hello")).unwrap(),
            json!({"chat_id": 42, "text": "hello"})
        );
    }

    #[test]
    fn send_options_are_flattened() {
        let opts = SendMessage {
            disable_web_page_preview: Some(false),
            send: SendOptions::silent().with_markup(InlineKeyboardMarkup::new(vec![vec![
                InlineKeyboardButton::callback("ok", "1"),
            ]])),
            ..SendMessage::new("@news", "<b>hi</b>").parse_mode(ParseMode::Html)
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({
                "chat_id": "@news",
                "text": "<b>hi</b>",
                "parse_mode": "HTML",
                "disable_web_page_preview": false,
                "disable_notification": true,
                "reply_markup": {"inline_keyboard": [[{"text": "ok", "callback_data": "1"}]]}
            })
        );
    }
}
