use crate::common::scenarios;
use crate::common::spawn_live_app;

#[tokio::test]
async fn get_journey_settings() {
    let app = spawn_live_app().await;
    scenarios::get_journey_settings(&app).await;
}

#[tokio::test]
async fn update_journey_settings() {
    let app = spawn_live_app().await;
    scenarios::update_journey_settings(&app).await;
}

#[tokio::test]
async fn update_welcome_message() {
    let app = spawn_live_app().await;
    scenarios::update_welcome_message(&app).await;
}

#[tokio::test]
async fn update_language_settings() {
    let app = spawn_live_app().await;
    scenarios::update_language_settings(&app).await;
}

#[tokio::test]
async fn update_journey_settings_unauthorized() {
    let mut app = spawn_live_app().await;
    let token_before = app.bearer_token();

    scenarios::update_journey_settings_unauthorized(&mut app).await;

    assert_eq!(app.bearer_token(), token_before);
}

#[tokio::test]
async fn every_mutating_endpoint_requires_a_token() {
    let mut app = spawn_live_app().await;
    scenarios::every_mutating_endpoint_requires_a_token(&mut app).await;
}
