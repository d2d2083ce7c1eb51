use super::*;

/// Expect the report to be removed regardless of its status
#[tokio::test]
async fn deletes_approved_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (user, region, crime_type) = test.report().insert_dependencies().await?;
    let report = test
        .report()
        .insert_report_with(
            user.id,
            region.id,
            crime_type.id,
            "Title",
            "Content",
            ReportStatus::Approved,
            0,
        )
        .await?;

    let report_repo = ReportRepository::new(&test.db);
    let result = report_repo.delete(report.id).await?;

    assert_eq!(result.rows_affected, 1);
    assert!(report_repo.get_by_id(report.id).await?.is_none());

    Ok(())
}

/// Expect no rows to be affected when deleting a report that does not exist
#[tokio::test]
async fn returns_no_rows_for_nonexistent_report() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;

    let report_repo = ReportRepository::new(&test.db);
    let result = report_repo.delete(1).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}

/// Expect Error when database tables required don't exist
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let report_repo = ReportRepository::new(&test.db);
    let result = report_repo.delete(1).await;

    assert!(result.is_err());

    Ok(())
}
