use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

use crate::server::error::{auth::AuthError, config::ConfigError, Error};

static GOOGLE_SCOPES: [&str; 3] = ["openid", "email", "profile"];

type GoogleOAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Login URL to redirect the user to along with the CSRF state it carries
pub struct LoginData {
    pub login_url: String,
    pub state: String,
}

/// Google account details returned by the userinfo endpoint
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GoogleProfile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Client for Google's OAuth2 authorization code flow
#[derive(Clone)]
pub struct GoogleClient {
    oauth: GoogleOAuthClient,
    http_client: reqwest::Client,
    userinfo_url: String,
}

impl GoogleClient {
    /// Creates a new [`GoogleClient`]
    ///
    /// # Returns
    /// - `Ok(GoogleClient)` - Client ready for use
    /// - `Err(Error::ConfigError)` - One of the URLs could not be parsed
    /// - `Err(Error::HttpClientError)` - HTTP client could not be built
    pub fn new(
        client_id: &str,
        client_secret: &str,
        auth_url: &str,
        token_url: &str,
        redirect_url: &str,
        userinfo_url: &str,
    ) -> Result<Self, Error> {
        let oauth = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_auth_uri(
                AuthUrl::new(auth_url.to_string())
                    .map_err(|e| ConfigError::invalid_value("GOOGLE_AUTH_URL", e))?,
            )
            .set_token_uri(
                TokenUrl::new(token_url.to_string())
                    .map_err(|e| ConfigError::invalid_value("GOOGLE_TOKEN_URL", e))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(redirect_url.to_string())
                    .map_err(|e| ConfigError::invalid_value("GOOGLE_REDIRECT_URL", e))?,
            );

        // Token         // Following redirects on the token endpoint would allow SSRF userinfo requests must not follow redirects
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            oauth,
            http_client,
            userinfo_url: userinfo_url.to_string(),
        })
    }

    /// Builds the Google consent screen URL with a fresh CSRF state
    pub fn login_url(&self) -> LoginData {
        let (url, state) = self
            .oauth
            .authorize_url(CsrfToken::new_random)
            .add_scopes(GOOGLE_SCOPES.iter().map(|s| Scope::new(s.to_string())))
            .add_extra_param("access_type", "offline")
            .add_extra_param("prompt", "consent")
            .url();

        LoginData {
            login_url: url.to_string(),
            state: state.secret().to_string(),
        }
    }

    /// Exchanges an authorization code for the profile of the Google account that granted it
    ///
    /// # Returns
    /// - `Ok(GoogleProfile)` - Profile of the signed in account
    /// - `Err(Error::AuthError(AuthError::IdentityProvider))` - Code exchange or profile
    ///   request failed
    pub async fn fetch_profile(&self, code: &str) -> Result<GoogleProfile, Error> {
        let token = self
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::IdentityProvider(format!("token exchange failed: {}", e)))?;

        let profile = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AuthError::IdentityProvider(format!("userinfo request failed: {}", e)))?
            .json::<GoogleProfile>()
            .await
            .map_err(|e| AuthError::IdentityProvider(format!("invalid userinfo response: {}", e)))?;

        Ok(profile)
    }
}
