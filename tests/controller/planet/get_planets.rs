//! Tests for the get_planets endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::{
    controller::planet::get_planets,
    model::{app::AppState, catalog::PlanetDto},
};
use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

/// Expect every created planet back in the list
#[tokio::test]
async fn success_with_planets() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    fixtures::insert_planet(&test.db, "Tatooine").await?;
    fixtures::insert_planet(&test.db, "Hoth").await?;
    let state = AppState { db: test.db.clone() };

    let result = get_planets(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let planets: Vec<PlanetDto> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(planets.len(), 2);

    Ok(())
}
