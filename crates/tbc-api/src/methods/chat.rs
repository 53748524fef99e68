//! Chat administration. Most of these need the bot to be an administrator
//! with the matching right.

use serde::Serialize;
use tbc_core::{Attachment, InputFile, Result};
use tokio_util::sync::CancellationToken;

use super::ChatOnly;
use crate::{
    types::{Chat, ChatId, ChatMember, ChatPermissions},
    BotClient,
};

/// Ban a user; in supergroups and channels they cannot rejoin until unbanned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KickChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Unix time; under 30 seconds or over 366 days from now bans forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

impl KickChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            until_date: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnbanChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// Without it, unbanning a current member kicks them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_if_banned: Option<bool>,
}

impl UnbanChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            only_if_banned: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RestrictChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    pub permissions: ChatPermissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_date: Option<i64>,
}

impl RestrictChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            permissions,
            until_date: None,
        }
    }
}

/// Grant or revoke admin rights. Every right left unset is revoked by the
/// server, so passing none demotes the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PromoteChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_change_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_post_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_invite_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_restrict_members: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_pin_messages: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_promote_members: Option<bool>,
}

impl PromoteChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            is_anonymous: None,
            can_change_info: None,
            can_post_messages: None,
            can_edit_messages: None,
            can_delete_messages: None,
            can_invite_users: None,
            can_restrict_members: None,
            can_pin_messages: None,
            can_promote_members: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetChatAdministratorCustomTitle {
    pub chat_id: ChatId,
    pub user_id: i64,
    /// 0-16 characters, no emoji.
    pub custom_title: String,
}

impl SetChatAdministratorCustomTitle {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64, custom_title: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
            custom_title: custom_title.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetChatPermissions {
    pub chat_id: ChatId,
    pub permissions: ChatPermissions,
}

impl SetChatPermissions {
    pub fn new(chat_id: impl Into<ChatId>, permissions: ChatPermissions) -> Self {
        Self {
            chat_id: chat_id.into(),
            permissions,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetChatTitle {
    pub chat_id: ChatId,
    pub title: String,
}

impl SetChatTitle {
    pub fn new(chat_id: impl Into<ChatId>, title: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            title: title.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetChatDescription {
    pub chat_id: ChatId,
    /// `None` clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SetChatDescription {
    pub fn new(chat_id: impl Into<ChatId>, description: Option<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PinChatMessage {
    pub chat_id: ChatId,
    pub message_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
}

impl PinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
            disable_notification: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnpinChatMessage {
    pub chat_id: ChatId,
    /// `None` unpins the most recent pinned message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<i64>,
}

impl UnpinChatMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: Option<i64>) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetChatMember {
    pub chat_id: ChatId,
    pub user_id: i64,
}

impl GetChatMember {
    pub fn new(chat_id: impl Into<ChatId>, user_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            user_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetChatStickerSet {
    pub chat_id: ChatId,
    pub sticker_set_name: String,
}

impl SetChatStickerSet {
    pub fn new(chat_id: impl Into<ChatId>, sticker_set_name: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            sticker_set_name: sticker_set_name.into(),
        }
    }
}

impl BotClient {
    pub async fn kick_chat_member(
        &self,
        ctx: &CancellationToken,
        opts: &KickChatMember,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "kickChatMember", opts).await
    }

    pub async fn unban_chat_member(
        &self,
        ctx: &CancellationToken,
        opts: &UnbanChatMember,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "unbanChatMember", opts).await
    }

    pub async fn restrict_chat_member(
        &self,
        ctx: &CancellationToken,
        opts: &RestrictChatMember,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "restrictChatMember", opts).await
    }

    pub async fn promote_chat_member(
        &self,
        ctx: &CancellationToken,
        opts: &PromoteChatMember,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "promoteChatMember", opts).await
    }

    pub async fn set_chat_administrator_custom_title(
        &self,
        ctx: &CancellationToken,
        opts: &SetChatAdministratorCustomTitle,
    ) -> Result<bool> {
        self.dispatcher
            .post(ctx, "setChatAdministratorCustomTitle", opts)
            .await
    }

    pub async fn set_chat_permissions(
        &self,
        ctx: &CancellationToken,
        opts: &SetChatPermissions,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "setChatPermissions", opts).await
    }

    /// Generate a new primary invite link; the previous one is revoked.
    pub async fn export_chat_invite_link(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<String> {
        self.dispatcher
            .post(ctx, "exportChatInviteLink", &ChatOnly::new(chat_id))
            .await
    }

    /// Always uploaded; chat photos cannot be set by file id.
    pub async fn set_chat_photo(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
        photo: InputFile,
    ) -> Result<bool> {
        self.dispatcher
            .post_with_uploads(
                ctx,
                "setChatPhoto",
                &ChatOnly::new(chat_id),
                vec![Attachment::new("photo", photo)],
            )
            .await
    }

    pub async fn delete_chat_photo(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<bool> {
        self.dispatcher
            .post(ctx, "deleteChatPhoto", &ChatOnly::new(chat_id))
            .await
    }

    pub async fn set_chat_title(
        &self,
        ctx: &CancellationToken,
        opts: &SetChatTitle,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "setChatTitle", opts).await
    }

    pub async fn set_chat_description(
        &self,
        ctx: &CancellationToken,
        opts: &SetChatDescription,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "setChatDescription", opts).await
    }

    pub async fn pin_chat_message(
        &self,
        ctx: &CancellationToken,
        opts: &PinChatMessage,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "pinChatMessage", opts).await
    }

    pub async fn unpin_chat_message(
        &self,
        ctx: &CancellationToken,
        opts: &UnpinChatMessage,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "unpinChatMessage", opts).await
    }

    pub async fn unpin_all_chat_messages(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<bool> {
        self.dispatcher
            .post(ctx, "unpinAllChatMessages", &ChatOnly::new(chat_id))
            .await
    }

    pub async fn leave_chat(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<bool> {
        self.dispatcher
            .post(ctx, "leaveChat", &ChatOnly::new(chat_id))
            .await
    }

    pub async fn get_chat(&self, ctx: &CancellationToken, chat_id: impl Into<ChatId>) -> Result<Chat> {
        self.dispatcher
            .post(ctx, "getChat", &ChatOnly::new(chat_id))
            .await
    }

    /// Administrators other than bots.
    pub async fn get_chat_administrators(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<Vec<ChatMember>> {
        self.dispatcher
            .post(ctx, "getChatAdministrators", &ChatOnly::new(chat_id))
            .await
    }

    pub async fn get_chat_members_count(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<u32> {
        self.dispatcher
            .post(ctx, "getChatMembersCount", &ChatOnly::new(chat_id))
            .await
    }

    pub async fn get_chat_member(
        &self,
        ctx: &CancellationToken,
        opts: &GetChatMember,
    ) -> Result<ChatMember> {
        self.dispatcher.post(ctx, "getChatMember", opts).await
    }

    pub async fn set_chat_sticker_set(
        &self,
        ctx: &CancellationToken,
        opts: &SetChatStickerSet,
    ) -> Result<bool> {
        self.dispatcher.post(ctx, "setChatStickerSet", opts).await
    }

    pub async fn delete_chat_sticker_set(
        &self,
        ctx: &CancellationToken,
        chat_id: impl Into<ChatId>,
    ) -> Result<bool> {
        self.dispatcher
            .post(ctx, "deleteChatStickerSet", &ChatOnly::new(chat_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn restrict_sends_only_set_permissions() {
        let opts = RestrictChatMember::new(
            -100,
            7,
            ChatPermissions {
                can_send_messages: Some(false),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({"chat_id": -100, "user_id": 7, "permissions": {"can_send_messages": false}})
        );
    }

    #[test]
    fn unset_promotion_rights_are_omitted() {
        let opts = PromoteChatMember {
            can_pin_messages: Some(true),
            can_promote_members: Some(false),
            ..PromoteChatMember::new("@group", 3)
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({
                "chat_id": "@group",
                "user_id": 3,
                "can_pin_messages": true,
                "can_promote_members": false
            })
        );
    }
}
