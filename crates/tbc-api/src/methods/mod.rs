//! Options payloads and one `BotClient` method per Bot API operation.
//!
//! Every method takes the caller's [`CancellationToken`] first. Optional
//! parameters are `Option` fields that stay out of the request when unset;
//! an explicit `Some(false)` or `Some(0)` is always sent.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod bot;
mod chat;
mod editing;
mod location;
mod media;
mod messages;
mod polls;
mod queries;
mod updates;

use serde::Serialize;
use tbc_core::{Attachment, InputFile};

use crate::types::{ChatId, ReplyMarkup};

pub use bot::SetMyCommands;
pub use chat::{
    GetChatMember, KickChatMember, PinChatMessage, PromoteChatMember,
    RestrictChatMember, SetChatAdministratorCustomTitle, SetChatDescription, SetChatPermissions,
    SetChatStickerSet, SetChatTitle, UnbanChatMember, UnpinChatMessage,
};
pub use editing::{
    EditMessageCaption, EditMessageMedia, EditMessageReplyMarkup, EditMessageText, MessageTarget,
};
pub use location::{EditMessageLiveLocation, SendLocation, SendVenue, StopMessageLiveLocation};
pub use media::{
    GetFile, GetUserProfilePhotos, SendAnimation, SendAudio, SendDocument, SendMediaGroup,
    SendPhoto, SendVideo, SendVideoNote, SendVoice,
};
pub use messages::{
    CopyMessage, DeleteMessage, ForwardMessage, SendChatAction, SendContact, SendDice,
    SendMessage,
};
pub use polls::{SendPoll, StopPoll};
pub use queries::{AnswerCallbackQuery, AnswerInlineQuery};
pub use updates::{DeleteWebhook, GetUpdates, SetWebhook};

/// Delivery options shared by every `send*` operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

impl SendOptions {
    pub fn reply_to(message_id: i64) -> Self {
        Self {
            reply_to_message_id: Some(message_id),
            ..Default::default()
        }
    }

    pub fn silent() -> Self {
        Self {
            disable_notification: Some(true),
            ..Default::default()
        }
    }

    pub fn with_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }
}

/// Pair each present upload with the form field it replaces.
fn attachments<const N: usize>(files: [(&str, Option<InputFile>); N]) -> Vec<Attachment> {
    files
        .into_iter()
        .filter_map(|(field, file)| file.map(|f| Attachment::new(field, f)))
        .collect()
}

/// Attach files under their own names, for `attach://<name>` references.
fn named_attachments(files: Vec<InputFile>) -> Vec<Attachment> {
    files.into_iter().map(Attachment::by_name).collect()
}

/// Payload for operations that only take the chat.
#[derive(Serialize)]
struct ChatOnly {
    chat_id: ChatId,
}

impl ChatOnly {
    fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ForceReply;
    use serde_json::json;

    #[test]
    fn send_options_omit_unset_fields() {
        assert_eq!(serde_json::to_value(SendOptions::default()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(SendOptions::reply_to(9).with_markup(ForceReply::default()))
                .unwrap(),
            json!({"reply_to_message_id": 9, "reply_markup": {"force_reply": true}})
        );
    }

    #[test]
    fn only_present_uploads_become_attachments() {
        let files = attachments([
            ("audio", Some(InputFile::from_bytes("a.mp3", vec![1u8, 2]))),
            ("thumb", None),
        ]);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].field, "audio");
    }
}
