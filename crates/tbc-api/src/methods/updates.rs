use serde::Serialize;
use tbc_core::{InputFile, Result};
use tokio_util::sync::CancellationToken;

use super::attachments;
use crate::{
    types::{Update, WebhookInfo},
    BotClient,
};

/// Long-polling parameters. All fields are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetUpdates {
    /// First update to return; confirms everything before it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// 1..=100, server default 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Long-polling timeout in seconds; 0 means short polling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SetWebhook {
    /// HTTPS URL; an empty string removes the webhook.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_updates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl SetWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_pending_updates: Option<bool>,
}

impl BotClient {
    pub async fn get_updates(
        &self,
        ctx: &CancellationToken,
        opts: &GetUpdates,
    ) -> Result<Vec<Update>> {
        self.dispatcher.post(ctx, "getUpdates", opts).await
    }

    /// `certificate` uploads a self-signed public key.
    pub async fn set_webhook(
        &self,
        ctx: &CancellationToken,
        opts: &SetWebhook,
        certificate: Option<InputFile>,
    ) -> Result<bool> {
        let files = attachments([("certificate", certificate)]);
        self.dispatcher
            .post_with_uploads(ctx, "setWebhook", opts, files)
            .await
    }

    pub async fn delete_webhook(
        &self,
        ctx: &CancellationToken,
        opts: &DeleteWebhook,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "deleteWebhook", opts).await
    }

    pub async fn get_webhook_info(&self, ctx: &CancellationToken) -> Result<WebhookInfo> {
        self.dispatcher.get(ctx, "getWebhookInfo").await
    }
}
