use chrono::{Datelike, Utc};
use tipline::{
    model::stat::{OfficialStatDto, OfficialStatQueryDto, RegionStatsDto, RegionStatsQueryDto},
    server::controller::{
        admin::approve_report,
        stat::{get_region_stats, list_official_stats},
    },
};

use super::*;

/// Expect an approved report to show up in the region breakdown for the current year
#[tokio::test]
async fn approval_appears_in_region_stats() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report(user.id, region.id, crime_type.id)
        .await?;
    let admin = test.user().insert_admin("admin@example.com").await?;
    SessionUserId::insert(&test.session, admin.id).await.unwrap();
    let state = test.into_app_state();

    let approved = approve_report(State(state.clone()), test.session.clone(), Path(report.id)).await;
    assert_eq!(approved.into_response().status(), StatusCode::OK);

    let result = get_region_stats(
        State(state),
        Query(RegionStatsQueryDto {
            province: "Seoul".to_string(),
            city: Some("Jongno-gu".to_string()),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: RegionStatsDto = json_body(resp).await;
    assert_eq!(body.region, "Seoul Jongno-gu");
    assert_eq!(body.year, Utc::now().year());
    assert_eq!(body.statistics.len(), 1);
    assert_eq!(body.statistics[0].crime_major, "Theft");
    assert_eq!(body.statistics[0].count, 1);

    Ok(())
}

/// Expect 404 for a region without statistics
#[tokio::test]
async fn region_stats_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let result = get_region_stats(
        State(test.into_app_state()),
        Query(RegionStatsQueryDto {
            province: "Busan".to_string(),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect only rows of the requested year
#[tokio::test]
async fn lists_official_stats_by_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let region = test.reference().insert_region("Seoul", None).await?;
    let crime_type = test.reference().insert_crime_type("Theft", None).await?;
    test.stat()
        .insert_official_stat(region.id, Some(crime_type.id), 2023, 10)
        .await?;
    let wanted = test
        .stat()
        .insert_official_stat(region.id, Some(crime_type.id), 2024, 12)
        .await?;

    let result = list_official_stats(
        State(test.into_app_state()),
        Query(OfficialStatQueryDto {
            year: Some(2024),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<OfficialStatDto> = json_body(resp).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].id, wanted.id);
    assert_eq!(body[0].count, 12);

    Ok(())
}
