//! Tests for the get_user_favorites endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::favorite::get_user_favorites,
    model::{app::AppState, favorite::UserFavoritesDto},
};
use holocron_test_utils::{fixtures, test_setup_with_catalog_tables, TestError};

/// Expect all five groups present, populated only where favorites exist
#[tokio::test]
async fn success_grouped_by_type() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user = fixtures::insert_user(&test.db, "luke", "luke@rebellion.org").await?;
    let planet = fixtures::insert_planet(&test.db, "Tatooine").await?;
    let vehicle = fixtures::insert_vehicle(&test.db, "Speeder Bike").await?;
    fixtures::insert_planet_favorite(&test.db, user.id, planet.id).await?;
    fixtures::insert_vehicle_favorite(&test.db, user.id, vehicle.id).await?;
    let state = AppState { db: test.db.clone() };

    let result = get_user_favorites(State(state), Path(user.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let favorites: UserFavoritesDto = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.vehicles.len(), 1);
    assert!(favorites.species.is_empty());
    assert!(favorites.starships.is_empty());
    assert!(favorites.people.is_empty());
    assert_eq!(favorites.planets[0].item_id, planet.id);

    Ok(())
}

/// Expect 404 Not Found when the user does not exist
#[tokio::test]
async fn user_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let state = AppState { db: test.db.clone() };

    let result = get_user_favorites(State(state), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
