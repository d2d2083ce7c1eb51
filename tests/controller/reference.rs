use tipline::{
    model::reference::{CrimeTypeDto, RegionDto},
    server::controller::reference::{list_crime_types, list_regions},
};

use super::*;

/// Expect regions ordered by full name
#[tokio::test]
async fn lists_regions() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    test.reference()
        .insert_region("Seoul", Some("Mapo-gu"))
        .await?;
    test.reference()
        .insert_region("Busan", Some("Haeundae-gu"))
        .await?;

    let result = list_regions(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<RegionDto> = json_body(resp).await;
    let names: Vec<&str> = body.iter().map(|r| r.full_name.as_str()).collect();
    assert_eq!(names, vec!["Busan Haeundae-gu", "Seoul Mapo-gu"]);

    Ok(())
}

/// Expect every crime type
#[tokio::test]
async fn lists_crime_types() -> Result<(), TestError> {
    let test = TestBuilder::new().with_report_tables().build().await?;
    test.reference()
        .insert_crime_type("Theft", Some("Burglary"))
        .await?;
    test.reference().insert_crime_type("Assault", None).await?;

    let result = list_crime_types(State(test.into_app_state())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<CrimeTypeDto> = json_body(resp).await;
    assert_eq!(body.len(), 2);
    assert_eq!(body[0].major, "Assault");

    Ok(())
}
