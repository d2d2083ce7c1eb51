use axum::http::header::LOCATION;
use tipline::{
    model::user::UserDto,
    server::{
        controller::auth::{callback, login, logout, me, CallbackParams},
        model::session::auth::SessionAuthCsrf,
    },
};

use super::*;

fn callback_params(state: &str) -> CallbackParams {
    CallbackParams {
        state: state.to_string(),
        code: "auth-code".to_string(),
    }
}

/// Expect a redirect to the Google consent screen with the CSRF state stored in session
#[tokio::test]
async fn login_redirects_to_google() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = login(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers().get(LOCATION).unwrap().to_str().unwrap();
    assert!(location.starts_with(&format!(
        "{}{}",
        test.server_url(),
        constant::GOOGLE_AUTH_PATH
    )));
    assert!(SessionAuthCsrf::get(&test.session).await.is_ok());

    Ok(())
}

/// Expect a new user to be signed in & redirected to the frontend
#[tokio::test]
async fn callback_signs_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_google_endpoints("google-123", "citizen@example.com", Some("Citizen"))
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(callback_params("state")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        resp.headers().get(LOCATION).unwrap(),
        constant::TEST_FRONTEND_URL
    );
    assert!(SessionUserId::get(&test.session).await.unwrap().is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect 400 without contacting Google when the CSRF state does not match
#[tokio::test]
async fn callback_rejects_csrf_mismatch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(callback_params("forged")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 400 when Google rejects the authorization code
#[tokio::test]
async fn callback_fails_when_google_rejects_code() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionAuthCsrf::insert(&test.session, "state").await.unwrap();

    let result = callback(
        State(test.into_app_state()),
        test.session.clone(),
        Query(callback_params("state")),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the signed in user to be returned
#[tokio::test]
async fn me_returns_signed_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let user = test.user().insert_admin("admin@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = me(State(test.into_app_state()), test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: UserDto = json_body(resp).await;
    assert_eq!(body.id, user.id);
    assert_eq!(body.email, "admin@example.com");

    Ok(())
}

/// Expect 401 when nobody is signed in
#[tokio::test]
async fn me_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = me(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 401 & a cleared session when the session user no longer exists
#[tokio::test]
async fn me_clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = me(State(test.into_app_state()), test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 & the user removed from session
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 even when nobody is signed in
#[tokio::test]
async fn logout_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session.clone()).await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    Ok(())
}
