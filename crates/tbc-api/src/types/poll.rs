use serde::{Deserialize, Serialize};

use super::{message::MessageEntity, user::User};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollType {
    Regular,
    Quiz,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: u32,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub kind: PollType,
    pub allows_multiple_answers: bool,
    /// Only for closed quizzes, or quizzes sent by the bot.
    pub correct_option_id: Option<u32>,
    pub explanation: Option<String>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<u32>,
    pub close_date: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub voter_count: u32,
}

/// A user's answer in a non-anonymous poll. Empty `option_ids` means a retracted vote.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,
    pub user: User,
    pub option_ids: Vec<u32>,
}
