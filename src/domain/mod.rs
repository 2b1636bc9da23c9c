mod journey_id;
mod language_code;
mod settings_body;

pub use journey_id::JourneyId;
pub use language_code::LanguageCode;
pub use settings_body::{LanguageSettingsUpdate, SettingsBody, SettingsUpdate, WelcomeMessageUpdate};
