//! Google OAuth2 HTTP mock endpoint creation utilities.

use mockito::{Matcher, Mock};

use crate::{
    constant::{GOOGLE_TOKEN_PATH, GOOGLE_USERINFO_PATH, TEST_ACCESS_TOKEN},
    TestContext,
};

impl TestContext {
    pub fn google<'a>(&'a mut self) -> GoogleFixtures<'a> {
        GoogleFixtures { setup: self }
    }
}

pub struct GoogleFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> GoogleFixtures<'a> {
    /// Create mock HTTP endpoints for the Google authorization code flow.
    ///
    /// Sets up two mock endpoints:
    /// 1. POST `/token` - Exchanges any authorization code for a bearer access token
    /// 2. GET `/oauth2/v2/userinfo` - Returns the profile for that bearer token
    ///
    /// # Returns
    /// - `Vec<Mock>` - Both mock endpoints (token and userinfo) for verification
    pub fn create_google_endpoints(
        &mut self,
        google_id: &str,
        email: &str,
        name: Option<&str>,
    ) -> Vec<Mock> {
        let token_body = serde_json::json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
        });

        let mut profile = serde_json::json!({
            "id": google_id,
            "email": email,
            "verified_email": true,
            "picture": "https://example.com/avatar.png",
        });
        if let Some(name) = name {
            profile["name"] = serde_json::Value::String(name.to_string());
        }

        let token_endpoint = self
            .setup
            .server
            .mock("POST", GOOGLE_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(token_body.to_string())
            .create();

        let userinfo_endpoint = self
            .setup
            .server
            .mock("GET", GOOGLE_USERINFO_PATH)
            .match_header(
                "authorization",
                Matcher::Exact(format!("Bearer {}", TEST_ACCESS_TOKEN)),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(profile.to_string())
            .create();

        vec![token_endpoint, userinfo_endpoint]
    }
}
