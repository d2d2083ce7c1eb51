use entity::report::ReportStatus;
use tipline::{
    model::report::{
        CreateReportDto, PatchReportDto, ReportDto, ReportQueryDto, ReportStatusDto,
    },
    server::controller::report::{
        create_report, delete_report, get_report, list_reports, patch_report,
    },
};

use super::*;

fn new_report(region_id: i32, crime_type_id: i32) -> CreateReportDto {
    CreateReportDto {
        title: "Broken window".to_string(),
        content: "Someone threw a rock through the shop window last night".to_string(),
        region_id,
        crime_type_id,
    }
}

/// Expect 200 with every report when no filter is given
#[tokio::test]
async fn lists_reports() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    test.report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    test.report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;

    let result = list_reports(
        State(test.into_app_state()),
        Query(ReportQueryDto::default()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<ReportDto> = json_body(resp).await;
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].region.full_name, region.full_name);

    Ok(())
}

/// Expect 404 for a report that does not exist
#[tokio::test]
async fn get_missing_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let result = get_report(State(test.into_app_state()), Path(1)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 201 with a pending report for a signed in user
#[tokio::test]
async fn creates_pending_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_report(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_report(region.id, crime_type.id)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: ReportDto = json_body(resp).await;
    assert_eq!(body.user_id, user.id);
    assert_eq!(body.status, ReportStatusDto::Pending);
    assert_eq!(body.crime_type.id, crime_type.id);
    assert!(body.official_stat_id.is_none());

    Ok(())
}

/// Expect the advisor's suggestion to replace the submitted crime type
#[tokio::test]
async fn create_applies_advisor_suggestion() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .with_advisor_endpoint(200, "2")
        .build()
        .await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let vandalism = test
        .reference()
        .insert_crime_type("Vandalism", None)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_report(
        State(test.into_app_state_with_advisor()),
        test.session.clone(),
        Json(new_report(region.id, crime_type.id)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: ReportDto = json_body(resp).await;
    assert_eq!(body.crime_type.id, vandalism.id);
    test.assert_mocks();

    Ok(())
}

/// Expect the submitted crime type to be kept when the advisor fails
#[tokio::test]
async fn create_keeps_crime_type_when_advisor_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_report_tables()
        .with_advisor_endpoint(500, "upstream unavailable")
        .build()
        .await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_report(
        State(test.into_app_state_with_advisor()),
        test.session.clone(),
        Json(new_report(region.id, crime_type.id)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: ReportDto = json_body(resp).await;
    assert_eq!(body.crime_type.id, crime_type.id);

    Ok(())
}

/// Expect 401 when submitting without signing in
#[tokio::test]
async fn create_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (_, region, crime_type) = test.report().insert_dependencies().await?;

    let result = create_report(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_report(region.id, crime_type.id)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 400 for a region that does not exist
#[tokio::test]
async fn create_rejects_unknown_region() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, _, crime_type) = test.report().insert_dependencies().await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_report(
        State(test.into_app_state()),
        test.session.clone(),
        Json(new_report(999, crime_type.id)),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 403 when someone other than the author edits a report
#[tokio::test]
async fn patch_requires_author() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    let other = test
        .user()
        .insert_user("neighbour@example.com", entity::app_user::UserRole::User)
        .await?;
    SessionUserId::insert(&test.session, other.id).await.unwrap();

    let result = patch_report(
        State(test.into_app_state()),
        test.session.clone(),
        Path(report.id),
        Json(PatchReportDto {
            title: Some("Edited".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 409 when editing a report that was already moderated
#[tokio::test]
async fn patch_rejects_moderated_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report_with(
            user.id,
            region.id,
            crime_type.id,
            "Bicycle stolen",
            "Taken from the rack",
            ReportStatus::Approved,
            0,
        )
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = patch_report(
        State(test.into_app_state()),
        test.session.clone(),
        Path(report.id),
        Json(PatchReportDto {
            title: Some("Edited".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with the changed title for the author
#[tokio::test]
async fn patch_updates_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = patch_report(
        State(test.into_app_state()),
        test.session.clone(),
        Path(report.id),
        Json(PatchReportDto {
            title: Some("Bicycle and helmet stolen".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ReportDto = json_body(resp).await;
    assert_eq!(body.title, "Bicycle and helmet stolen");
    assert_eq!(body.content, report.content);
    assert!(body.updated_at.is_some());

    Ok(())
}

/// Expect 204 & the report to be gone afterwards
#[tokio::test]
async fn deletes_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();
    let state = test.into_app_state();

    let result = delete_report(State(state.clone()), test.session.clone(), Path(report.id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);

    let result = get_report(State(state), Path(report.id)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
