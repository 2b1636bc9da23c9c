//! Shared test data constants to avoid magic strings across the suites

use journey_settings_harness::domain::{
    JourneyId, LanguageCode, LanguageSettingsUpdate, SettingsUpdate, WelcomeMessageUpdate,
};
use std::time::Duration;

/// Journey every case in a suite targets; provisioned (or absent) upstream
pub const FIXTURE_JOURNEY_ID: &str = "test-journey-123";

/// Valid id format, never provisioned by the fake service
pub const UNKNOWN_JOURNEY_ID: &str = "journey-that-does-not-exist";

pub const WELCOME_MESSAGE: &str = "Welcome to your onboarding journey!";
pub const WELCOME_MESSAGE_DISPLAY_DURATION_MS: u64 = 5000;

/// The service may or may not hold the fixture journey
pub const FOUND_OR_NOT_FOUND: &[u16] = &[200, 404];

pub fn journey_id(id: &str) -> JourneyId {
    JourneyId::parse(id.to_string()).expect("Invalid journey id in test data.")
}

pub fn language(code: &str) -> LanguageCode {
    LanguageCode::parse(code.to_string()).expect("Invalid language code in test data.")
}

pub fn settings_update() -> SettingsUpdate {
    SettingsUpdate {
        default_language: Some(language("en")),
        is_active: Some(true),
    }
}

pub fn welcome_message_update() -> WelcomeMessageUpdate {
    WelcomeMessageUpdate {
        message: WELCOME_MESSAGE.to_string(),
        display_duration: Duration::from_millis(WELCOME_MESSAGE_DISPLAY_DURATION_MS),
    }
}

pub fn language_settings_update() -> LanguageSettingsUpdate {
    LanguageSettingsUpdate {
        default_language: language("en"),
        available_languages: vec![language("en"), language("de"), language("fr")],
    }
}
