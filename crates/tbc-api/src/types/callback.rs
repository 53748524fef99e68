use serde::Deserialize;

use super::{message::Message, user::User};

/// A press on an inline keyboard button.
///
/// `message` is set for buttons under bot messages, `inline_message_id` for
/// buttons under inline-mode messages.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub message: Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}
