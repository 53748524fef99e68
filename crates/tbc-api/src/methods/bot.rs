use serde::Serialize;
use tbc_core::Result;
use tokio_util::sync::CancellationToken;

use crate::{
    types::{BotCommand, User},
    BotClient,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetMyCommands {
    pub commands: Vec<BotCommand>,
}

impl SetMyCommands {
    pub fn new(commands: Vec<BotCommand>) -> Self {
        Self { commands }
    }
}

impl BotClient {
    /// The bot's own user.
    pub async fn get_me(&self, ctx: &CancellationToken) -> Result<User> {
        self.dispatcher.get(ctx, "getMe").await
    }

    /// Log the bot out of the cloud Bot API server before moving it to a
    /// local one.
    pub async fn log_out(&self, ctx: &CancellationToken) -> Result<()> {
        self.dispatcher.post_ignored(ctx, "logOut").await
    }

    /// Close the bot instance before moving it between local servers.
    pub async fn close(&self, ctx: &CancellationToken) -> Result<()> {
        self.dispatcher.post_ignored(ctx, "close").await
    }

    pub async fn set_my_commands(
        &self,
        ctx: &CancellationToken,
        opts: &SetMyCommands,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "setMyCommands", opts).await
    }

    pub async fn get_my_commands(&self, ctx: &CancellationToken) -> Result<Vec<BotCommand>> {
        self.dispatcher.get(ctx, "getMyCommands").await
    }

    /// Whether inline mode is enabled for this bot (via `getMe`).
    pub async fn inline_mode(&self, ctx: &CancellationToken) -> Result<bool> {
        let me = self.get_me(ctx).await?;
        Ok(me.is_bot && me.supports_inline_queries.unwrap_or(false))
    }
}
