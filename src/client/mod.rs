//! Client layer: configuration, the generic Bot API invoker, and the typed
//! operations built on it.

mod error;
mod transport;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{
    BotToken, DeleteMessage, EditMessage, Message, SendMessage, User, ValidationError,
};
use crate::transport::{
    EnvelopeOutcome, decode_envelope, encode_delete_message, encode_edit_message,
    encode_send_message,
};

pub use error::{ConfigError, TgError, TransportError};
pub use transport::{
    BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

pub const DEFAULT_API_SERVER: &str = "https://api.telegram.org";

const JSON_CONTENT_TYPE: &str = "application/json";

const GET_ME: &str = "getMe";
const SEND_MESSAGE: &str = "sendMessage";
const EDIT_MESSAGE_TEXT: &str = "editMessageText";
const DELETE_MESSAGE: &str = "deleteMessage";

#[derive(Clone)]
/// Builder for [`TgClient`].
///
/// Setters only record configuration; [`TgClientBuilder::build`] checks the
/// token first and then applies the settings in order, stopping at the first
/// one that fails.
pub struct TgClientBuilder {
    token: String,
    api_server: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl TgClientBuilder {
    /// Create a builder with the public Bot API server and the default transport.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_server: None,
            transport: None,
            timeout: transport::DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Use another Bot API server, e.g. a self-hosted `telegram-bot-api`.
    ///
    /// Must be an absolute `http`/`https` URL with a host.
    pub fn api_server(mut self, server: impl Into<String>) -> Self {
        self.api_server = Some(server.into());
        self
    }

    /// Replace the default reqwest transport.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Request timeout of the default transport (2 seconds unless set).
    ///
    /// Ignored when a custom transport is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header of the default transport.
    ///
    /// Ignored when a custom transport is injected.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`TgClient`].
    pub fn build(self) -> Result<TgClient, ConfigError> {
        let token = BotToken::new(self.token).map_err(|_| ConfigError::IncorrectToken)?;

        let api_server = match self.api_server {
            Some(server) => parse_api_server(&server)?,
            None => DEFAULT_API_SERVER.to_owned(),
        };

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(
                ReqwestTransport::with_defaults(self.timeout, self.user_agent)
                    .map_err(ConfigError::HttpClient)?,
            ),
        };

        let endpoint = format!(
            "{}/bot{}/",
            api_server.trim_end_matches('/'),
            token.expose()
        );

        Ok(TgClient {
            token,
            endpoint,
            http,
        })
    }
}

fn parse_api_server(server: &str) -> Result<String, ConfigError> {
    let url = match Url::parse(server) {
        Ok(url) => url,
        Err(url::ParseError::EmptyHost) => return Err(ConfigError::EmptyHost),
        Err(err) => return Err(ConfigError::InvalidUrl(err)),
    };
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::IncorrectScheme {
            scheme: url.scheme().to_owned(),
        });
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::EmptyHost);
    }
    Ok(server.to_owned())
}

#[derive(Clone)]
/// Telegram Bot API client.
///
/// Validates requests, posts them as JSON to `<server>/bot<token>/<method>`,
/// and decodes the `{"ok", "result", ...}` envelope. The client holds no
/// mutable state; clones share the transport.
pub struct TgClient {
    token: BotToken,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for TgClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TgClient")
            .field(
                "endpoint",
                &crate::transport::redact_token(&self.endpoint, &self.token),
            )
            .finish_non_exhaustive()
    }
}

impl TgClient {
    /// Create a client for the public Bot API server with the default transport.
    ///
    /// For more customization, use [`TgClient::builder`].
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        TgClientBuilder::new(token).build()
    }

    pub fn builder(token: impl Into<String>) -> TgClientBuilder {
        TgClientBuilder::new(token)
    }

    /// Call an arbitrary Bot API method.
    ///
    /// `body`, when present, must serialize to a JSON object. The decoded
    /// `result` is returned only when the envelope says `"ok": true`.
    ///
    /// Errors:
    /// - [`TgError::Validation`] / [`TgError::Encode`] before any I/O,
    /// - [`TgError::Transport`] when the exchange fails (token redacted),
    /// - [`TgError::Decode`] for 2xx bodies that are not an envelope (empty
    ///   bodies included), [`TgError::HttpStatus`] for such bodies on any
    ///   other status,
    /// - [`TgError::Api`] when the Bot API reports `"ok": false`,
    /// - [`TgError::MissingResult`] for `"ok": true` without `result`.
    pub async fn invoke<B, R>(&self, method: &'static str, body: Option<&B>) -> Result<R, TgError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if method.is_empty() {
            return Err(TgError::Validation {
                method,
                source: ValidationError::EmptyMethod,
            });
        }
        let body = body.map(|body| encode_body(method, body)).transpose()?;

        let request = HttpRequest {
            url: format!("{}{method}", self.endpoint),
            content_type: JSON_CONTENT_TYPE,
            body,
        };
        debug!(method, has_body = request.body.is_some(), "calling bot api");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|err| TgError::Transport {
                method,
                source: TransportError::new(err, &self.token),
            })?;

        let envelope = match decode_envelope::<R>(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if !(200..=299).contains(&response.status) => {
                return Err(TgError::HttpStatus {
                    method,
                    status: response.status,
                    body: non_empty_body(&response.body, &self.token),
                });
            }
            Err(source) => return Err(TgError::Decode { method, source }),
        };

        match envelope.into_outcome() {
            EnvelopeOutcome::Ok(Some(result)) => Ok(result),
            EnvelopeOutcome::Ok(None) => Err(TgError::MissingResult { method }),
            EnvelopeOutcome::Failed(source) => {
                debug!(
                    method,
                    status = response.status,
                    code = ?source.code(),
                    "bot api reported failure"
                );
                Err(TgError::Api { method, source })
            }
        }
    }

    /// Identify the bot account (`getMe`).
    pub async fn get_me(&self) -> Result<User, TgError> {
        self.invoke::<(), _>(GET_ME, None).await
    }

    /// Send a text message (`sendMessage`).
    pub async fn send_message(&self, request: SendMessage) -> Result<Message, TgError> {
        request.validate().map_err(|source| TgError::Validation {
            method: SEND_MESSAGE,
            source,
        })?;
        self.invoke(SEND_MESSAGE, Some(&encode_send_message(&request)))
            .await
    }

    /// Replace the text of a sent message (`editMessageText`).
    pub async fn edit_message(&self, request: EditMessage) -> Result<Message, TgError> {
        request.validate().map_err(|source| TgError::Validation {
            method: EDIT_MESSAGE_TEXT,
            source,
        })?;
        self.invoke(EDIT_MESSAGE_TEXT, Some(&encode_edit_message(&request)))
            .await
    }

    /// Delete a message (`deleteMessage`). The Bot API answers `true` on success.
    pub async fn delete_message(&self, request: DeleteMessage) -> Result<bool, TgError> {
        request.validate().map_err(|source| TgError::Validation {
            method: DELETE_MESSAGE,
            source,
        })?;
        self.invoke(DELETE_MESSAGE, Some(&encode_delete_message(&request)))
            .await
    }
}

fn encode_body<B: Serialize + ?Sized>(method: &'static str, body: &B) -> Result<Vec<u8>, TgError> {
    let value = serde_json::to_value(body).map_err(|source| TgError::Encode { method, source })?;
    if !value.is_object() {
        return Err(TgError::Validation {
            method,
            source: ValidationError::BodyNotObject,
        });
    }
    serde_json::to_vec(&value).map_err(|source| TgError::Encode { method, source })
}

// Gateway error pages may echo the request URL.
fn non_empty_body(body: &[u8], token: &BotToken) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    if text.trim().is_empty() {
        None
    } else {
        Some(crate::transport::redact_token(&text, token))
    }
}
