use super::JourneySettingsClient;
use crate::authentication::BearerToken;
use std::ops::{Deref, DerefMut};

/// Temporarily replaces the bearer token of a client.
///
/// The previous token is put back when the guard is dropped, which also
/// happens while unwinding from a failed assertion.
pub struct ScopedToken<'a> {
    client: &'a mut JourneySettingsClient,
    previous: Option<BearerToken>,
}

impl<'a> ScopedToken<'a> {
    pub(super) fn new(client: &'a mut JourneySettingsClient, token: Option<BearerToken>) -> Self {
        let previous = client.auth_mut().replace_bearer_token(token);
        Self { client, previous }
    }
}

impl Deref for ScopedToken<'_> {
    type Target = JourneySettingsClient;

    fn deref(&self) -> &Self::Target {
        &*self.client
    }
}

impl DerefMut for ScopedToken<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.client
    }
}

impl Drop for ScopedToken<'_> {
    fn drop(&mut self) {
        let previous = self.previous.take();
        self.client.auth_mut().replace_bearer_token(previous);
        tracing::debug!("Restored the bearer token held before the scope");
    }
}
