//! Test configuration constants for OAuth and advisor client setup.
//!
//! None of these values are real credentials; they only need to match between the
//! mock endpoints and the clients built against the mock server.

/// Mock Google OAuth2 client ID.
pub static TEST_GOOGLE_CLIENT_ID: &str = "google_client_id";

/// Mock Google OAuth2 client secret.
pub static TEST_GOOGLE_CLIENT_SECRET: &str = "google_client_secret";

/// Redirect URL registered for the mock OAuth2 client.
pub static TEST_REDIRECT_URL: &str = "http://localhost:8080/api/auth/google/callback";

/// Frontend URL users are sent to after a successful login.
pub static TEST_FRONTEND_URL: &str = "http://localhost:3000";

/// Access token handed out by the mock token endpoint.
pub static TEST_ACCESS_TOKEN: &str = "mock_access_token";

/// API key used by the advisor client in tests.
pub static TEST_OPENAI_API_KEY: &str = "sk-test";

/// Path of the mock authorization endpoint.
pub static GOOGLE_AUTH_PATH: &str = "/o/oauth2/v2/auth";

/// Path of the mock token endpoint.
pub static GOOGLE_TOKEN_PATH: &str = "/token";

/// Path of the mock userinfo endpoint.
pub static GOOGLE_USERINFO_PATH: &str = "/oauth2/v2/userinfo";

/// Path of the mock chat completions endpoint.
pub static CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
