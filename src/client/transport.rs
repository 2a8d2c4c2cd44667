use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type BoxError = Box<dyn StdError + Send + Sync>;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;
const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// A prepared `POST` request.
///
/// `url` embeds the bot token; implementations must not log it.
#[derive(Clone)]
pub struct HttpRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: Option<Vec<u8>>,
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequest")
            .field("url", &"<redacted>")
            .field("content_type", &self.content_type)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The capability to perform one HTTP exchange.
///
/// [`ReqwestTransport`] is the default; inject another implementation with
/// [`TgClientBuilder::transport`](crate::TgClientBuilder::transport) for a
/// custom pool, a proxy, or tests. Cancellation is dropping the returned future.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an already configured [`reqwest::Client`].
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub(crate) fn with_defaults(
        timeout: Duration,
        user_agent: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(DEFAULT_POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(DEFAULT_POOL_IDLE_TIMEOUT);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self::new(builder.build()?))
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .post(&request.url)
                .header(CONTENT_TYPE, request.content_type);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            // reqwest errors echo the URL, which carries the token.
            let response = builder.send().await.map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}
