//! Bot API 5.0 data model.
//!
//! Types the server sends are `Deserialize` only and tolerate missing
//! optional fields. Types the caller sends are `Serialize` and leave unset
//! optional fields out of the payload.

mod callback;
mod chat;
mod inline;
mod keyboard;
mod location;
mod media;
mod message;
mod poll;
mod update;
mod user;

pub use callback::CallbackQuery;
pub use chat::{
    Chat, ChatAction, ChatId, ChatLocation, ChatMember, ChatMemberStatus, ChatPermissions,
    ChatPhoto, ChatType,
};
pub use inline::{
    ChosenInlineResult, InlineQuery, InlineQueryResult, InlineQueryResultArticle,
    InlineQueryResultContact, InlineQueryResultDocument, InlineQueryResultGif,
    InlineQueryResultLocation, InlineQueryResultPhoto, InlineQueryResultVenue,
    InlineQueryResultVideo, InputContactMessageContent, InputLocationMessageContent,
    InputMessageContent, InputTextMessageContent, InputVenueMessageContent,
};
pub use keyboard::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardButtonPollType, LoginUrl, ReplyKeyboardMarkup, ReplyKeyboardRemove, ReplyMarkup,
};
pub use location::{Location, ProximityAlertTriggered, Venue};
pub use media::{
    Animation, Audio, Document, File, InputMedia, InputMediaAnimation, InputMediaAudio,
    InputMediaDocument, InputMediaPhoto, InputMediaVideo, PhotoSize, Sticker, Video, VideoNote,
    Voice,
};
pub use message::{
    Contact, Dice, EditedMessage, EntityUser, Message, MessageEntity, MessageEntityType,
    MessageId, ParseMode,
};
pub use poll::{Poll, PollAnswer, PollOption, PollType};
pub use update::{Update, WebhookInfo};
pub use user::{BotCommand, User, UserProfilePhotos};
