use crate::domain::LanguageCode;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Body of `/journeys/{id}/settings` updates. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_language: Option<LanguageCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeMessageUpdate {
    pub message: String,
    /// Sent as an integer number of milliseconds.
    #[serde(serialize_with = "serialize_as_millis")]
    pub display_duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSettingsUpdate {
    pub default_language: LanguageCode,
    /// Order is preserved on the wire.
    pub available_languages: Vec<LanguageCode>,
}

/// JSON body of a settings request.
///
/// The typed variants cover the fields the service knows about, `Raw` sends
/// arbitrary JSON, which is what negative tests need.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingsBody {
    Settings(SettingsUpdate),
    WelcomeMessage(WelcomeMessageUpdate),
    LanguageSettings(LanguageSettingsUpdate),
    Raw(serde_json::Value),
}

impl From<SettingsUpdate> for SettingsBody {
    fn from(value: SettingsUpdate) -> Self {
        Self::Settings(value)
    }
}

impl From<WelcomeMessageUpdate> for SettingsBody {
    fn from(value: WelcomeMessageUpdate) -> Self {
        Self::WelcomeMessage(value)
    }
}

impl From<LanguageSettingsUpdate> for SettingsBody {
    fn from(value: LanguageSettingsUpdate) -> Self {
        Self::LanguageSettings(value)
    }
}

impl From<serde_json::Value> for SettingsBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Raw(value)
    }
}

fn serialize_as_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let millis = u64::try_from(duration.as_millis()).map_err(serde::ser::Error::custom)?;
    serializer.serialize_u64(millis)
}
