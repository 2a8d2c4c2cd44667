use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use crate::client::transport::BoxError;
use crate::domain::{ApiError, BotToken, ValidationError};
use crate::transport::redact_token;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TgClientBuilder::build`](crate::TgClientBuilder::build).
pub enum ConfigError {
    /// The token does not look like `<digits>:<alphanumeric-or-dash>`.
    #[error("incorrect token")]
    IncorrectToken,

    #[error("api server: {0}")]
    InvalidUrl(#[source] url::ParseError),

    #[error("api server: incorrect scheme {scheme:?}")]
    IncorrectScheme { scheme: String },

    #[error("api server: empty host")]
    EmptyHost,

    /// The default HTTP client could not be built (TLS backend, etc).
    #[error("http client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// A failed HTTP exchange with the bot token scrubbed from its message.
///
/// The original error is not exposed through [`StdError::source`], so error
/// reporters walking the chain cannot print an unredacted URL. Use
/// [`TransportError::get_ref`] to inspect or downcast it.
pub struct TransportError {
    message: String,
    inner: BoxError,
}

impl TransportError {
    pub(crate) fn new(inner: BoxError, token: &BotToken) -> Self {
        Self {
            message: redact_token(&inner.to_string(), token),
            inner,
        }
    }

    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for TransportError {}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TgClient`](crate::TgClient) calls.
///
/// Every variant carries the remote method it happened in (`sendMessage`,
/// `getMe`, ...), and the variant tells which tier failed:
/// - local validation, before any I/O,
/// - transport (network, timeout, TLS), with the token redacted,
/// - undecodable response bodies,
/// - failures reported by the Bot API (`"ok": false`).
pub enum TgError {
    #[error("{method}: validation error: {source}")]
    Validation {
        method: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{method}: transport error: {source}")]
    Transport {
        method: &'static str,
        #[source]
        source: TransportError,
    },

    /// The request body could not be serialized.
    #[error("{method}: encode error: {source}")]
    Encode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The body was not an envelope and the HTTP status was not 2xx.
    #[error("{method}: unexpected HTTP status: {status}")]
    HttpStatus {
        method: &'static str,
        status: u16,
        body: Option<String>,
    },

    #[error("{method}: parse error: {source}")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{method}: {source}")]
    Api {
        method: &'static str,
        #[source]
        source: ApiError,
    },

    /// `"ok": true` without a `result`.
    #[error("{method}: response has no result")]
    MissingResult { method: &'static str },
}

impl TgError {
    /// Remote method the error happened in.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Validation { method, .. }
            | Self::Transport { method, .. }
            | Self::Encode { method, .. }
            | Self::HttpStatus { method, .. }
            | Self::Decode { method, .. }
            | Self::Api { method, .. }
            | Self::MissingResult { method } => *method,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        self.api_error().and_then(ApiError::retry_after)
    }

    /// Whether retrying the same call later could succeed. The client itself
    /// never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Api { source, .. } => {
                source.retry_after().is_some() || source.code() == Some(429)
            }
            Self::Validation { .. }
            | Self::Encode { .. }
            | Self::Decode { .. }
            | Self::MissingResult { .. } => false,
        }
    }
}
