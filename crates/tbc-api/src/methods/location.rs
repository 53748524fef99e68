use serde::Serialize;
use tbc_core::Result;
use tokio_util::sync::CancellationToken;

use super::{MessageTarget, SendOptions};
use crate::{
    types::{ChatId, EditedMessage, InlineKeyboardMarkup, Message},
    BotClient,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of uncertainty in meters, 0..=1500.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    /// Seconds the location stays live, 60..=86400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendLocation {
    pub fn new(chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            horizontal_accuracy: None,
            live_period: None,
            heading: None,
            proximity_alert_radius: None,
            send: SendOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageLiveLocation {
    #[serde(flatten)]
    pub target: MessageTarget,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_accuracy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proximity_alert_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl EditMessageLiveLocation {
    pub fn new(target: MessageTarget, latitude: f64, longitude: f64) -> Self {
        Self {
            target,
            latitude,
            longitude,
            horizontal_accuracy: None,
            heading: None,
            proximity_alert_radius: None,
            reply_markup: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StopMessageLiveLocation {
    #[serde(flatten)]
    pub target: MessageTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl StopMessageLiveLocation {
    pub fn new(target: MessageTarget) -> Self {
        Self {
            target,
            reply_markup: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_place_type: Option<String>,
    #[serde(flatten)]
    pub send: SendOptions,
}

impl SendVenue {
    pub fn new(
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            chat_id: chat_id.into(),
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            foursquare_id: None,
            foursquare_type: None,
            google_place_id: None,
            google_place_type: None,
            send: SendOptions::default(),
        }
    }
}

impl BotClient {
    pub async fn send_location(
        &self,
        ctx: &CancellationToken,
        opts: &SendLocation,
    ) -> Result<Message> {
        self.dispatcher.post(ctx, "sendLocation", opts).await
    }

    /// Move a live location until its `live_period` expires or it is stopped.
    pub async fn edit_message_live_location(
        &self,
        ctx: &CancellationToken,
        opts: &EditMessageLiveLocation,
    ) -> Result<EditedMessage> {
        self.dispatcher
            .post(ctx, "editMessageLiveLocation", opts)
            .await
    }

    pub async fn stop_message_live_location(
        &self,
        ctx: &CancellationToken,
        opts: &StopMessageLiveLocation,
    ) -> Result<EditedMessage> {
        self.dispatcher
            .post(ctx, "stopMessageLiveLocation", opts)
            .await
    }

    pub async fn send_venue(&self, ctx: &CancellationToken, opts: &SendVenue) -> Result<Message> {
        self.dispatcher.post(ctx, "sendVenue", opts).await
    }
}
