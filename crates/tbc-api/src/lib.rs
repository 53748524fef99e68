//! Typed client for the Telegram Bot API.
//!
//! ```no_run
//! # async fn run() -> tbc_api::Result<()> {
//! use tbc_api::{methods::SendMessage, BotClient, CancellationToken};
//!
//! let bot = BotClient::from_env()?;
//! let ctx = CancellationToken::new();
//! let sent = bot.send_message(&ctx, &SendMessage::new(42, "hello")).await?;
//! println!("sent message {}", sent.message_id);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod methods;
pub mod types;

pub use client::BotClient;
pub use tbc_core::{logging, ApiError, ClientConfig, Error, HttpTransport, InputFile, Result};
pub use tokio_util::sync::CancellationToken;
