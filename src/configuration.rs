use crate::authentication::BearerToken;
use crate::domain::JourneyId;
use crate::journey_client::{ClientError, JourneySettingsClient, UpdateMethod};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub target: TargetSettings,
    pub fixture: FixtureSettings,
}

/// The deployment of the Journey Settings service under test.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct TargetSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    #[serde(default)]
    pub update_method: UpdateMethod,
    pub bearer_token: Option<Secret<String>>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct FixtureSettings {
    pub journey_id: String,
}

impl TargetSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn bearer_token(&self) -> Result<Option<BearerToken>, String> {
        self.bearer_token
            .clone()
            .map(BearerToken::try_from)
            .transpose()
    }

    pub fn client(&self) -> Result<JourneySettingsClient, ClientError> {
        let bearer_token = self.bearer_token().map_err(anyhow::Error::msg)?;
        JourneySettingsClient::new(
            self.base_url.clone(),
            self.update_method,
            bearer_token,
            self.timeout(),
        )
    }
}

impl FixtureSettings {
    pub fn journey_id(&self) -> Result<JourneyId, String> {
        JourneyId::parse(self.journey_id.clone())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| config::ConfigError::Foreign(e.into()))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_TARGET__BEARER_TOKEN=abc` would set `Settings.target.bearer_token`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for our harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Staging,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "staging" => Ok(Self::Staging),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `staging`.",
                other
            )),
        }
    }
}
