use crate::domain::JourneyId;

/// The settings resources exposed for every journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Settings,
    WelcomeMessage,
    LanguageSettings,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [
        Endpoint::Settings,
        Endpoint::WelcomeMessage,
        Endpoint::LanguageSettings,
    ];

    /// Path relative to the service base URL.
    pub fn path(&self, journey_id: &JourneyId) -> String {
        match self {
            Endpoint::Settings => format!("/journeys/{}/settings", journey_id),
            Endpoint::WelcomeMessage => {
                format!("/journeys/{}/settings/welcome-message", journey_id)
            }
            Endpoint::LanguageSettings => format!("/journeys/{}/settings/language", journey_id),
        }
    }
}

/// HTTP verb used for settings updates. The service owns this choice, so it
/// is read from configuration.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMethod {
    #[default]
    Put,
    Patch,
}

impl UpdateMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateMethod::Put => "PUT",
            UpdateMethod::Patch => "PATCH",
        }
    }
}

impl From<UpdateMethod> for reqwest::Method {
    fn from(value: UpdateMethod) -> Self {
        match value {
            UpdateMethod::Put => reqwest::Method::PUT,
            UpdateMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

impl std::fmt::Display for UpdateMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
