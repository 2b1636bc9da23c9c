use journey_settings_harness::authentication::BearerToken;
use journey_settings_harness::domain::JourneyId;
use journey_settings_harness::journey_client::{Endpoint, UpdateMethod};
use secrecy::ExposeSecret;
use serde_json::json;
use wiremock::matchers::{any, header, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const SETTINGS_PATH_PATTERN: &str = r"^/journeys/[^/]+/settings(/welcome-message|/language)?$";

/// In-process stand-in for the Journey Settings service.
///
/// Exactly one journey exists. Requests without the expected bearer token
/// get a 401, requests for any other journey a 404.
pub struct FakeJourneyService {
    pub server: MockServer,
}

/// Answers an update with the stored state, which is whatever was sent.
struct EchoUpdate;

impl Respond for EchoUpdate {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match serde_json::from_slice::<serde_json::Value>(&request.body) {
            Ok(body) => ResponseTemplate::new(200).set_body_json(body),
            Err(_) => ResponseTemplate::new(400).set_body_json(json!({
                "error": "Malformed JSON body"
            })),
        }
    }
}

fn stored_settings(journey_id: &JourneyId) -> serde_json::Value {
    json!({
        "journeyId": journey_id.as_ref(),
        "defaultLanguage": "en",
        "isActive": true,
        "availableLanguages": ["en"],
        "welcomeMessage": {
            "message": "Welcome!",
            "displayDuration": 3000
        }
    })
}

impl FakeJourneyService {
    #[tracing::instrument(name = "Starting fake journey settings service", skip(bearer_token))]
    pub async fn start(
        journey_id: &JourneyId,
        bearer_token: &BearerToken,
        update_method: UpdateMethod,
    ) -> Self {
        let server = MockServer::start().await;
        let authorization = format!("Bearer {}", bearer_token.expose_secret());

        Mock::given(method("GET"))
            .and(path(Endpoint::Settings.path(journey_id)))
            .and(header("Authorization", authorization.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_settings(journey_id)))
            .with_priority(1)
            .mount(&server)
            .await;

        for endpoint in Endpoint::ALL {
            Mock::given(method(update_method.as_str()))
                .and(path(endpoint.path(journey_id)))
                .and(header("Authorization", authorization.as_str()))
                .respond_with(EchoUpdate)
                .with_priority(1)
                .mount(&server)
                .await;

            // Known resource, but not a verb the service accepts
            Mock::given(path(endpoint.path(journey_id)))
                .and(header("Authorization", authorization.as_str()))
                .respond_with(ResponseTemplate::new(405))
                .with_priority(2)
                .mount(&server)
                .await;
        }

        Mock::given(path_regex(SETTINGS_PATH_PATTERN))
            .and(header("Authorization", authorization.as_str()))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "Journey not found"
            })))
            .with_priority(3)
            .mount(&server)
            .await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Authentication required"
            })))
            .with_priority(4)
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub async fn received_requests(&self) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is disabled.")
    }

    /// Body of the most recent request, parsed as JSON.
    pub async fn last_received_body(&self) -> serde_json::Value {
        let requests = self.received_requests().await;
        let request = requests.last().expect("No request was received.");
        serde_json::from_slice(&request.body).expect("Request body is not JSON.")
    }
}
