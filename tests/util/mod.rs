//! Helpers for building application state & reading responses in controller tests

use std::sync::Arc;

use axum::response::Response;
use serde::de::DeserializeOwned;
use tipline::server::{
    model::app::AppState,
    service::{
        auth::google::GoogleClient,
        classifier::{openai::OpenAiAdvisor, CrimeTypeAdvisor, NoAdvisor},
    },
};
use tipline_test_utils::{constant, TestContext};

/// Extension trait for TestContext to create AppState pointed at the mock server
pub trait TestContextExt {
    /// App state without a crime type advisor
    fn into_app_state(&self) -> AppState;

    /// App state with the OpenAI advisor calling the mock server
    fn into_app_state_with_advisor(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        app_state(self, Arc::new(NoAdvisor))
    }

    fn into_app_state_with_advisor(&self) -> AppState {
        let advisor = OpenAiAdvisor::new(
            reqwest::Client::new(),
            constant::TEST_OPENAI_API_KEY.to_string(),
            &self.server_url(),
        );

        app_state(self, Arc::new(advisor))
    }
}

fn app_state(test: &TestContext, advisor: Arc<dyn CrimeTypeAdvisor>) -> AppState {
    let base = test.server_url();

    let google = GoogleClient::new(
        constant::TEST_GOOGLE_CLIENT_ID,
        constant::TEST_GOOGLE_CLIENT_SECRET,
        &format!("{}{}", base, constant::GOOGLE_AUTH_PATH),
        &format!("{}{}", base, constant::GOOGLE_TOKEN_PATH),
        constant::TEST_REDIRECT_URL,
        &format!("{}{}", base, constant::GOOGLE_USERINFO_PATH),
    )
    .expect("Failed to build Google client for tests");

    AppState {
        db: test.db.clone(),
        google,
        advisor,
        frontend_url: constant::TEST_FRONTEND_URL.to_string(),
    }
}

/// Deserializes a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
