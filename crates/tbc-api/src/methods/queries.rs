use serde::Serialize;
use tbc_core::Result;
use tokio_util::sync::CancellationToken;

use crate::{types::InlineQueryResult, BotClient};

/// Answer to an inline keyboard press. The client shows a progress bar
/// until this is called, even with no text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Alert dialog instead of a notification at the top of the chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Seconds the answer may be cached client-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// At most 50 results per answer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_personal: Option<bool>,
    /// Pass back in the next query to fetch more; empty when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_pm_parameter: Option<String>,
}

impl AnswerInlineQuery {
    pub fn new(inline_query_id: impl Into<String>, results: Vec<InlineQueryResult>) -> Self {
        Self {
            inline_query_id: inline_query_id.into(),
            results,
            cache_time: None,
            is_personal: None,
            next_offset: None,
            switch_pm_text: None,
            switch_pm_parameter: None,
        }
    }
}

impl BotClient {
    pub async fn answer_callback_query(
        &self,
        ctx: &CancellationToken,
        opts: &AnswerCallbackQuery,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "answerCallbackQuery", opts).await
    }

    pub async fn answer_inline_query(
        &self,
        ctx: &CancellationToken,
        opts: &AnswerInlineQuery,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "answerInlineQuery", opts).await
    }
}
