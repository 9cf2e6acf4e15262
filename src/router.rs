//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, and
//! Swagger UI is served at `/api/docs` with the OpenAPI document at
//! `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// Handlers sharing a path are registered in one `routes!` call so their
/// methods merge into a single method router.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron catalog API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::specie::SPECIE_TAG, description = "Specie API routes"),
        (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
        (name = controller::starship::STARSHIP_TAG, description = "Starship API routes"),
        (name = controller::person::PERSON_TAG, description = "Person API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users, controller::user::create_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::specie::get_species,
            controller::specie::create_specie
        ))
        .routes(routes!(controller::specie::get_specie))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(controller::vehicle::get_vehicle))
        .routes(routes!(
            controller::starship::get_starships,
            controller::starship::create_starship
        ))
        .routes(routes!(controller::starship::get_starship))
        .routes(routes!(
            controller::person::get_people,
            controller::person::create_person
        ))
        .routes(routes!(controller::person::get_person))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::add_planet_favorite,
            controller::favorite::remove_planet_favorite
        ))
        .routes(routes!(
            controller::favorite::add_specie_favorite,
            controller::favorite::remove_specie_favorite
        ))
        .routes(routes!(
            controller::favorite::add_vehicle_favorite,
            controller::favorite::remove_vehicle_favorite
        ))
        .routes(routes!(
            controller::favorite::add_starship_favorite,
            controller::favorite::remove_starship_favorite
        ))
        .routes(routes!(
            controller::favorite::add_person_favorite,
            controller::favorite::remove_person_favorite
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
