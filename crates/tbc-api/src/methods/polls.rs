use serde::Serialize;
use tbc_core::Result;
use tokio_util::sync::CancellationToken;

use super::SendOptions;
use crate::{
    types::{ChatId, InlineKeyboardMarkup, Message, MessageEntity, ParseMode, Poll, PollType},
    BotClient,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendPoll {
    pub chat_id: ChatId,
    pub question: String,
    /// 2-10 answer options.
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<PollType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allows_multiple_answers: Option<bool>,
    /// Required for quizzes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_entities: Option<Vec<MessageEntity>>,
    /// Seconds, 5..=600; excludes `close_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendPoll {
    pub fn new(chat_id: impl Into<ChatId>, question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            question: question.into(),
            options,
            is_anonymous: None,
            kind: None,
            allows_multiple_answers: None,
            correct_option_id: None,
            explanation: None,
            explanation_parse_mode: None,
            explanation_entities: None,
            open_period: None,
            close_date: None,
            is_closed: None,
            send: SendOptions::default(),
        }
    }

    /// A quiz with one correct answer.
    pub fn quiz(
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: Vec<String>,
        correct_option_id: u32,
    ) -> Self {
        Self {
            kind: Some(PollType::Quiz),
            correct_option_id: Some(correct_option_id),
            ..Self::new(chat_id, question, options)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StopPoll {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopPoll {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            reply_markup: None,
        }
    }
}

impl BotClient {
    pub async fn send_poll(&self, ctx: &CancellationToken, opts: &SendPoll) -> Result<Message> {
        self.dispatcher.post(ctx, "sendPoll", opts).await
    }

    /// Close a poll the bot sent; returns the final state.
    pub async fn stop_poll(&self, ctx: &CancellationToken, opts: &StopPoll) -> Result<Poll> {
        self.dispatcher.post(ctx, "stopPoll", opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quiz_sets_type_and_answer() {
        let poll = SendPoll::quiz(1, "2+2?", vec!["3".into(), "4".into()], 1);
        assert_eq!(
            serde_json::to_value(&poll).unwrap(),
            json!({
                "chat_id": 1,
                "question": "2+2?",
                "options": ["3", "4"],
                "type": "quiz",
                "correct_option_id": 1
            })
        );
    }
}
