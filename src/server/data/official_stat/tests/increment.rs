use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

/// Expect a new row with count 1 when no row exists for the key
#[tokio::test]
async fn creates_row_with_count_one() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (_, region, crime_type) = test.report().insert_dependencies().await?;

    let stat_repo = OfficialStatRepository::new(&test.db);
    let stat = stat_repo.increment(region.id, crime_type.id, 2025).await?;

    assert_eq!(stat.count, 1);
    assert_eq!(stat.region_id, region.id);
    assert_eq!(stat.crime_type_id, Some(crime_type.id));
    assert_eq!(stat.year, 2025);

    Ok(())
}

/// Expect the existing row to be incremented in place
#[tokio::test]
async fn increments_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (_, region, crime_type) = test.report().insert_dependencies().await?;
    let existing = test
        .stat()
        .insert_official_stat(region.id, Some(crime_type.id), 2025, 3)
        .await?;

    let stat_repo = OfficialStatRepository::new(&test.db);
    let stat = stat_repo.increment(region.id, crime_type.id, 2025).await?;

    assert_eq!(stat.id, existing.id);
    assert_eq!(stat.count, 4);
    let rows = entity::prelude::OfficialStat::find().count(&test.db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Expect a different year to get its own row
#[tokio::test]
async fn separates_rows_by_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (_, region, crime_type) = test.report().insert_dependencies().await?;
    test.stat()
        .insert_official_stat(region.id, Some(crime_type.id), 2024, 7)
        .await?;

    let stat_repo = OfficialStatRepository::new(&test.db);
    let stat = stat_repo.increment(region.id, crime_type.id, 2025).await?;

    assert_eq!(stat.count, 1);
    let rows = entity::prelude::OfficialStat::find().count(&test.db).await?;
    assert_eq!(rows, 2);

    Ok(())
}

/// Expect a crime type with statistics to be protected from deletion
#[tokio::test]
async fn crime_type_with_stats_cannot_be_deleted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    let (_, region, crime_type) = test.report().insert_dependencies().await?;

    let stat_repo = OfficialStatRepository::new(&test.db);
    let stat = stat_repo.increment(region.id, crime_type.id, 2025).await?;

    let result = entity::prelude::CrimeType::delete_by_id(crime_type.id)
        .exec(&test.db)
        .await;

    assert!(result.is_err());
    let kept = entity::prelude::OfficialStat::find_by_id(stat.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(kept.crime_type_id, Some(crime_type.id));

    Ok(())
}
