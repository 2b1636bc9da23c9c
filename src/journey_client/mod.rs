mod endpoint;
mod response;
mod scoped_token;

pub use endpoint::{Endpoint, UpdateMethod};
pub use response::CapturedResponse;
pub use scoped_token::ScopedToken;

use crate::authentication::{AuthManager, BearerToken};
use crate::domain::{JourneyId, SettingsBody};
use crate::utils::error_chain_fmt;
use anyhow::Context;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use secrecy::ExposeSecret;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(thiserror::Error)]
pub enum ClientError {
    #[error("Failed to reach the journey settings service.")]
    Transport(#[source] reqwest::Error),
    #[error("Failed to serialize the request body.")]
    Serialization(#[source] serde_json::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(e) if e.is_timeout())
    }
}

impl std::fmt::Debug for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Issues the Journey Settings REST calls against one service.
///
/// An error status such as 404 or 401 is an `Ok` response; only failures to
/// complete the exchange are reported as `ClientError`. Nothing is retried.
#[derive(Debug, Clone)]
pub struct JourneySettingsClient {
    base_url: String,
    http_client: Client,
    update_method: UpdateMethod,
    auth: AuthManager,
}

impl JourneySettingsClient {
    pub fn new(
        base_url: String,
        update_method: UpdateMethod,
        bearer_token: Option<BearerToken>,
        timeout: std::time::Duration,
    ) -> Result<Self, ClientError> {
        reqwest::Url::parse(&base_url)
            .with_context(|| format!("Invalid base URL `{}`.", base_url))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the HTTP client.")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            update_method,
            auth: AuthManager::new(bearer_token),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn update_method(&self) -> UpdateMethod {
        self.update_method
    }

    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthManager {
        &mut self.auth
    }

    /// Use `token` until the returned guard goes out of scope.
    pub fn scoped_token(&mut self, token: Option<BearerToken>) -> ScopedToken<'_> {
        ScopedToken::new(self, token)
    }

    /// Send unauthenticated requests until the returned guard goes out of scope.
    pub fn without_token(&mut self) -> ScopedToken<'_> {
        ScopedToken::new(self, None)
    }

    pub async fn get_settings(
        &self,
        journey_id: &JourneyId,
    ) -> Result<CapturedResponse, ClientError> {
        self.send(Endpoint::Settings, Method::GET, journey_id, None)
            .await
    }

    pub async fn update_settings<B>(
        &self,
        journey_id: &JourneyId,
        body: B,
    ) -> Result<CapturedResponse, ClientError>
    where
        B: Into<SettingsBody>,
    {
        self.send(
            Endpoint::Settings,
            self.update_method.into(),
            journey_id,
            Some(&body.into()),
        )
        .await
    }

    pub async fn update_welcome_message<B>(
        &self,
        journey_id: &JourneyId,
        body: B,
    ) -> Result<CapturedResponse, ClientError>
    where
        B: Into<SettingsBody>,
    {
        self.send(
            Endpoint::WelcomeMessage,
            self.update_method.into(),
            journey_id,
            Some(&body.into()),
        )
        .await
    }

    pub async fn update_language_settings<B>(
        &self,
        journey_id: &JourneyId,
        body: B,
    ) -> Result<CapturedResponse, ClientError>
    where
        B: Into<SettingsBody>,
    {
        self.send(
            Endpoint::LanguageSettings,
            self.update_method.into(),
            journey_id,
            Some(&body.into()),
        )
        .await
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        method: Method,
        journey_id: &JourneyId,
        body: Option<&SettingsBody>,
    ) -> Result<CapturedResponse, ClientError> {
        let request_id = Uuid::new_v4();
        self.execute(endpoint, method, journey_id, request_id, body)
            .await
    }

    #[tracing::instrument(
        name = "Calling journey settings endpoint",
        skip(self, body),
        fields(
            http.status_code = tracing::field::Empty,
            authenticated = self.auth.bearer_token().is_some(),
        )
    )]
    async fn execute(
        &self,
        endpoint: Endpoint,
        method: Method,
        journey_id: &JourneyId,
        request_id: Uuid,
        body: Option<&SettingsBody>,
    ) -> Result<CapturedResponse, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint.path(journey_id));
        let mut request = self
            .http_client
            .request(method, &url)
            .header(REQUEST_ID_HEADER, request_id.to_string());
        if let Some(token) = self.auth.bearer_token() {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(ClientError::Serialization)?;
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {:?}", e);
            ClientError::Transport(e)
        })?;
        let response = CapturedResponse::capture(response)
            .await
            .map_err(ClientError::Transport)?;

        tracing::Span::current().record("http.status_code", response.status().as_u16());
        Ok(response)
    }
}
