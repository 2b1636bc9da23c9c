use super::BearerToken;

/// Holds the bearer token attached to outgoing requests.
///
/// Each `JourneySettingsClient` owns one, so tests that tamper with
/// authorization cannot affect each other.
#[derive(Debug, Clone, Default)]
pub struct AuthManager {
    bearer_token: Option<BearerToken>,
}

impl AuthManager {
    pub fn new(bearer_token: Option<BearerToken>) -> Self {
        Self { bearer_token }
    }

    pub fn bearer_token(&self) -> Option<&BearerToken> {
        self.bearer_token.as_ref()
    }

    pub fn set_bearer_token(&mut self, token: BearerToken) {
        tracing::debug!("Bearer token set");
        self.bearer_token = Some(token);
    }

    /// Clearing an already cleared token is a no-op.
    pub fn clear_bearer_token(&mut self) {
        if self.bearer_token.take().is_some() {
            tracing::debug!("Bearer token cleared");
        }
    }

    /// Swap in `token` and hand back whatever was held before.
    pub fn replace_bearer_token(&mut self, token: Option<BearerToken>) -> Option<BearerToken> {
        std::mem::replace(&mut self.bearer_token, token)
    }
}
