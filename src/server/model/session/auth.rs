//! OAuth login session state.
//!
//! The CSRF state generated when a Google login starts is kept in the session until the
//! callback consumes it.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key holding the pending OAuth CSRF state.
pub const SESSION_AUTH_CSRF_KEY: &str = "tipline:auth:csrf";

/// CSRF state issued with the Google authorization URL.
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Stores the CSRF state, replacing any state left by an abandoned login.
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Reads the CSRF state without consuming it.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state present in session
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Consumes the CSRF state so a callback URL cannot be replayed.
    ///
    /// # Returns
    /// - `Ok(String)` - CSRF state that was stored in session
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
    pub async fn remove(session: &Session) -> Result<String, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(csrf)) => Ok(csrf),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
