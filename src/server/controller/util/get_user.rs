use entity::app_user::UserRole;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, db::UserModel, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves user information from session and then from database
///
/// # Returns
/// - `Ok(UserModel)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}

/// Retrieves the user from session, requiring the `admin` role
///
/// # Returns
/// - `Ok(UserModel)`: Signed in admin
/// - `Err(Error::AuthError(AuthError::AdminRequired))`: Signed in user is not an admin
/// - Any error of [`get_user_from_session`]
pub async fn require_admin(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let user = get_user_from_session(state, session).await?;

    if user.role != UserRole::Admin {
        return Err(Error::AuthError(AuthError::AdminRequired(user.id)));
    }

    Ok(user)
}
