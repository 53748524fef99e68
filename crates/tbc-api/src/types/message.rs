use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    chat::Chat,
    keyboard::InlineKeyboardMarkup,
    location::{Location, ProximityAlertTriggered, Venue},
    media::{Animation, Audio, Document, PhotoSize, Sticker, Video, VideoNote, Voice},
    poll::Poll,
    user::User,
};

/// A message. Only `message_id` and `chat` are always present in practice.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub sender_chat: Option<Chat>,
    #[serde(default)]
    pub date: i64,
    pub chat: Chat,
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: Option<i64>,
    pub forward_signature: Option<String>,
    pub forward_sender_name: Option<String>,
    pub forward_date: Option<i64>,
    pub reply_to_message: Option<Box<Message>>,
    pub via_bot: Option<User>,
    pub edit_date: Option<i64>,
    pub media_group_id: Option<String>,
    pub author_signature: Option<String>,
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
    pub audio: Option<Audio>,
    pub document: Option<Document>,
    pub photo: Option<Vec<PhotoSize>>,
    pub sticker: Option<Sticker>,
    pub video: Option<Video>,
    pub video_note: Option<VideoNote>,
    pub voice: Option<Voice>,
    pub caption: Option<String>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub contact: Option<Contact>,
    pub dice: Option<Dice>,
    pub poll: Option<Poll>,
    pub venue: Option<Venue>,
    pub location: Option<Location>,
    pub new_chat_members: Option<Vec<User>>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    pub delete_chat_photo: Option<bool>,
    pub group_chat_created: Option<bool>,
    pub supergroup_chat_created: Option<bool>,
    pub channel_chat_created: Option<bool>,
    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,
    pub pinned_message: Option<Box<Message>>,
    pub connected_website: Option<String>,
    pub proximity_alert_triggered: Option<ProximityAlertTriggered>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    /// Send time; `None` when the server left `date` out.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.date)
    }

    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        self.edit_date.and_then(unix_time)
    }

    /// Text or caption, whichever the message carries.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }
}

fn unix_time(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// Result of `copyMessage`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageId {
    pub message_id: i64,
}

/// Result of the `editMessage*` family: the edited message, or `true` for
/// inline messages.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EditedMessage {
    Message(Box<Message>),
    Inline(bool),
}

impl EditedMessage {
    pub fn message(&self) -> Option<&Message> {
        match self {
            EditedMessage::Message(m) => Some(m),
            EditedMessage::Inline(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    MarkdownV2,
    #[serde(rename = "HTML")]
    Html,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityType {
    Mention,
    Hashtag,
    Cashtag,
    BotCommand,
    Url,
    Email,
    PhoneNumber,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Pre,
    TextLink,
    TextMention,
    #[serde(other)]
    Unknown,
}

/// A special entity in a text: hashtag, link, formatting span...
///
/// Offsets and lengths are in UTF-16 code units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityType,
    pub offset: u32,
    pub length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The mentioned user of a `text_mention` entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityUser {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
}

impl MessageEntity {
    pub fn new(kind: MessageEntityType, offset: u32, length: u32) -> Self {
        Self {
            kind,
            offset,
            length,
            url: None,
            user: None,
            language: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,
    pub vcard: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Dice {
    pub emoji: String,
    pub value: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_message_decodes() {
        let msg: Message = serde_json::from_value(json!({
            "message_id": 7,
            "chat": {"id": 42},
            "text": "hello"
        }))
        .unwrap();
        assert_eq!(msg.message_id, 7);
        assert_eq!(msg.chat.id, 42);
        assert_eq!(msg.text_or_caption(), Some("hello"));
        assert_eq!(msg.sent_at(), None);
    }

    #[test]
    fn dates_convert_to_utc() {
        let msg: Message = serde_json::from_value(json!({
            "message_id": 1,
            "date": 1_600_000_000,
            "edit_date": 1_600_000_060,
            "chat": {"id": 1, "type": "private"}
        }))
        .unwrap();
        assert_eq!(msg.sent_at().unwrap().timestamp(), 1_600_000_000);
        assert_eq!(msg.edited_at().unwrap().timestamp(), 1_600_000_060);
    }

    #[test]
    fn edited_message_accepts_message_or_true() {
        let inline: EditedMessage = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(inline, EditedMessage::Inline(true));
        assert!(inline.message().is_none());

        let full: EditedMessage =
            serde_json::from_value(json!({"message_id": 3, "chat": {"id": 9}})).unwrap();
        assert_eq!(full.message().map(|m| m.message_id), Some(3));
    }

    #[test]
    fn parse_mode_and_entity_wire_names() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
        assert_eq!(
            serde_json::to_value(MessageEntity::new(MessageEntityType::BotCommand, 0, 6)).unwrap(),
            json!({"type": "bot_command", "offset": 0, "length": 6})
        );
        let unknown: MessageEntity =
            serde_json::from_value(json!({"type": "spoiler", "offset": 1, "length": 2})).unwrap();
        assert_eq!(unknown.kind, MessageEntityType::Unknown);
    }
}
