use entity::{app_user::UserRole, report::ReportStatus};
use tipline::{
    model::report::{AdminReportQueryDto, ReportDto, ReportStatusDto},
    server::controller::admin::{approve_report, list_moderation_queue, reject_report},
};

use super::*;

/// Inserts an admin and signs them in
async fn sign_in_admin(test: &tipline_test_utils::TestContext) -> Result<i32, TestError> {
    let admin = test.user().insert_admin("admin@example.com").await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    Ok(admin.id)
}

/// Expect only pending reports, oldest first
#[tokio::test]
async fn queue_lists_pending_oldest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test.report();
    let newer = report
        .insert_report_with(user.id, region.id, crime_type.id, "Newer", "n", ReportStatus::Pending, 5)
        .await?;
    let older = report
        .insert_report_with(user.id, region.id, crime_type.id, "Older", "o", ReportStatus::Pending, 60)
        .await?;
    report
        .insert_report_with(user.id, region.id, crime_type.id, "Done", "d", ReportStatus::Approved, 120)
        .await?;
    sign_in_admin(&test).await?;

    let result = list_moderation_queue(
        State(test.into_app_state()),
        test.session.clone(),
        Query(AdminReportQueryDto::default()),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<ReportDto> = json_body(resp).await;
    let ids: Vec<i32> = body.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Expect 403 for a signed in user without the admin role
#[tokio::test]
async fn queue_requires_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let user = test
        .user()
        .insert_user("citizen@example.com", UserRole::User)
        .await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = list_moderation_queue(
        State(test.into_app_state()),
        test.session.clone(),
        Query(AdminReportQueryDto::default()),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 200 with the report approved & linked to its statistics row
#[tokio::test]
async fn approves_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    sign_in_admin(&test).await?;

    let result = approve_report(
        State(test.into_app_state()),
        test.session.clone(),
        Path(report.id),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ReportDto = json_body(resp).await;
    assert_eq!(body.status, ReportStatusDto::Approved);
    assert!(body.approved_at.is_some());
    assert!(body.official_stat_id.is_some());

    Ok(())
}

/// Expect 409 when approving a report a second time
#[tokio::test]
async fn approve_twice_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    sign_in_admin(&test).await?;
    let state = test.into_app_state();

    let first = approve_report(State(state.clone()), test.session.clone(), Path(report.id)).await;
    assert_eq!(first.into_response().status(), StatusCode::OK);

    let second = approve_report(State(state), test.session.clone(), Path(report.id)).await;
    assert_eq!(second.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 404 when approving a report that does not exist
#[tokio::test]
async fn approve_missing_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    sign_in_admin(&test).await?;

    let result = approve_report(State(test.into_app_state()), test.session.clone(), Path(42)).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 when nobody is signed in
#[tokio::test]
async fn approve_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;

    let result = approve_report(
        State(test.into_app_state()),
        test.session.clone(),
        Path(report.id),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 with the report rejected & no statistics link
#[tokio::test]
async fn rejects_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    sign_in_admin(&test).await?;

    let result = reject_report(
        State(test.into_app_state()),
        test.session.clone(),
        Path(report.id),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: ReportDto = json_body(resp).await;
    assert_eq!(body.status, ReportStatusDto::Rejected);
    assert!(body.rejected_at.is_some());
    assert!(body.official_stat_id.is_none());

    Ok(())
}
