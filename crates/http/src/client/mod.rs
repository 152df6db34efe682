//! Essays HTTP client
//!
//! All backend calls go through [`EssayClient`]. It attaches the bearer token
//! from the shared [`Session`], keeps the refresh cookie in its cookie store,
//! and on a 401 refreshes the token once and re-issues the original request.

pub mod auth;
pub mod error;
pub mod essay;
pub mod retry;
pub mod review;

use error::ClientError;
use essays_core::Session;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client, ClientBuilder, Request, Response, Url};
use retry::Attempt;
use std::sync::Arc;
use std::time::Duration;

/// Essays API client
#[derive(Clone)]
pub struct EssayClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
}

impl EssayClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> EssayClientBuilder {
        EssayClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Session this client reads its token from
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.client.request(method, self.url(path)))
    }

    /// Like [`request`](Self::request), but appends each segment to the
    /// base URL percent-encoded, so user input cannot change the path.
    pub fn request_segments(
        &self,
        method: reqwest::Method,
        segments: &[&str],
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Configuration(format!("invalid base_url: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Configuration("base_url cannot hold a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(self.authorize(self.client.request(method, url)))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.access_token() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        }
    }

    /// Execute a request, refreshing the session and retrying once on 401
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let mut attempt = Attempt::Initial;
        let mut request = request.build()?;

        loop {
            // Bodies are buffered JSON, so this only fails for streams.
            let replay = request.try_clone();

            let error = match self.send(request).await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            attempt = attempt.advance(&error);
            if !attempt.should_retry() {
                return Err(error);
            }

            let Some(mut next) = replay else {
                debug!("Request body cannot be replayed, not retrying");
                return Err(error);
            };

            let token = match self.refresh().await {
                Ok(token) => token,
                Err(refresh_error) => {
                    warn!("Session refresh failed: {refresh_error}");
                    self.session.clear_tokens();
                    return Err(error);
                }
            };

            next.headers_mut()
                .insert(header::AUTHORIZATION, bearer_header(&token)?);
            debug!(method = %next.method(), url = %next.url(), "Retrying with refreshed token");
            request = next;
        }
    }

    /// Execute a request exactly once, without the refresh-and-retry path
    pub async fn execute_once<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        self.send(request.build()?).await
    }

    async fn send<T: serde::de::DeserializeOwned>(&self, request: Request) -> Result<T, ClientError> {
        debug!(method = %request.method(), url = %request.url(), "Sending request");
        let response = self.client.execute(request).await?;
        Self::read(response).await
    }

    async fn read<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            debug!(status = status.as_u16(), "Request failed");
            Err(ClientError::from_status(status, &body))
        }
    }
}

fn bearer_header(token: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| ClientError::Configuration("access token is not a valid header value".into()))
}

/// Builder for EssayClient
#[derive(Default)]
pub struct EssayClientBuilder {
    base_url: Option<String>,
    session: Option<Arc<Session>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl EssayClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Share an existing session instead of starting an empty in-memory one
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<EssayClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }

        // The cookie store carries the refresh cookie between calls.
        let mut client_builder = ClientBuilder::new().cookie_store(true);

        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| concat!("essays-client/", env!("CARGO_PKG_VERSION")).to_string());
        client_builder = client_builder.user_agent(user_agent);

        let client = client_builder.build()?;

        Ok(EssayClient {
            client,
            base_url,
            session: self.session.unwrap_or_default(),
        })
    }
}
