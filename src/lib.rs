//! Typed Rust client for the Telegram Bot API messaging methods.
//!
//! The crate has three layers: a domain layer of validated request and
//! response types, a transport layer for the JSON wire format and the
//! response envelope, and a small client layer that posts requests through a
//! pluggable [`HttpTransport`].
//!
//! ```rust,no_run
//! use tg::{ParseMode, SendMessage, SendOptions, TgClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TgClient::new("123456:ABC-DEF")?;
//!     let me = client.get_me().await?;
//!     let options = SendOptions {
//!         parse_mode: ParseMode::HTML,
//!         ..Default::default()
//!     };
//!     let request = SendMessage::new(-100123, format!("<b>{}</b> is up", me.first_name), options)?;
//!     let message = client.send_message(request).await?;
//!     println!("sent message {}", message.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxError, BoxFuture, ConfigError, DEFAULT_API_SERVER, HttpRequest, HttpResponse,
    HttpTransport, ReqwestTransport, TgClient, TgClientBuilder, TgError, TransportError,
};
pub use domain::{
    ApiError, BotToken, DeleteMessage, EditMessage, EditOptions, MAX_TEXT_SIZE, Message,
    ParseMode, SendMessage, SendOptions, User, ValidationError,
};
