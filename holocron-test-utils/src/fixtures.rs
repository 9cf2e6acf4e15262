//! Fixture helpers that insert rows directly through the entity layer.
//!
//! Values mirror the seed data shapes; callers only pick the unique fields
//! and everything else gets a fixed filler value.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub async fn insert_user(
    db: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<entity::user::Model, TestError> {
    let user = entity::user::ActiveModel {
        username: ActiveValue::Set(username.to_string()),
        email: ActiveValue::Set(email.to_string()),
        password: ActiveValue::Set("hunter2".to_string()),
        firstname: ActiveValue::Set(String::new()),
        lastname: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(user.insert(db).await?)
}

pub async fn insert_planet(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::planet::Model, TestError> {
    let planet = entity::planet::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        diameter: ActiveValue::Set(10465),
        gravity: ActiveValue::Set(1.0),
        population: ActiveValue::Set(200_000),
        terrain: ActiveValue::Set("desert".to_string()),
        climate: ActiveValue::Set("arid".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(planet.insert(db).await?)
}

pub async fn insert_specie(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::specie::Model, TestError> {
    let specie = entity::specie::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        height: ActiveValue::Set(1.75),
        hair_color: ActiveValue::Set("varied".to_string()),
        skin_color: ActiveValue::Set("varied".to_string()),
        language: ActiveValue::Set("Galactic Basic".to_string()),
        average_life: ActiveValue::Set(100),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(specie.insert(db).await?)
}

pub async fn insert_vehicle(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::vehicle::Model, TestError> {
    let vehicle = entity::vehicle::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        crew: ActiveValue::Set(1),
        passengers: ActiveValue::Set(0),
        class_name: ActiveValue::Set("Starfighter".to_string()),
        cargo_cap: ActiveValue::Set(110),
        consumable: ActiveValue::Set("1 week".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(vehicle.insert(db).await?)
}

pub async fn insert_starship(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::starship::Model, TestError> {
    let starship = entity::starship::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        crew: ActiveValue::Set(4),
        passengers: ActiveValue::Set(6),
        class_name: ActiveValue::Set("Light Freighter".to_string()),
        cargo_cap: ActiveValue::Set(100_000),
        consumable: ActiveValue::Set("2 months".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(starship.insert(db).await?)
}

pub async fn insert_person(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::person::Model, TestError> {
    let person = entity::person::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        height: ActiveValue::Set(1.72),
        hair_color: ActiveValue::Set("Blond".to_string()),
        skin_color: ActiveValue::Set("Fair".to_string()),
        eye_color: ActiveValue::Set("Blue".to_string()),
        gender: ActiveValue::Set("Male".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(person.insert(db).await?)
}

pub async fn insert_planet_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    planet_id: i32,
) -> Result<entity::planet_favorite::Model, TestError> {
    let favorite = entity::planet_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planet_id: ActiveValue::Set(planet_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(favorite.insert(db).await?)
}

pub async fn insert_specie_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    specie_id: i32,
) -> Result<entity::specie_favorite::Model, TestError> {
    let favorite = entity::specie_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        specie_id: ActiveValue::Set(specie_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(favorite.insert(db).await?)
}

pub async fn insert_vehicle_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    vehicle_id: i32,
) -> Result<entity::vehicle_favorite::Model, TestError> {
    let favorite = entity::vehicle_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(favorite.insert(db).await?)
}

pub async fn insert_starship_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    starship_id: i32,
) -> Result<entity::starship_favorite::Model, TestError> {
    let favorite = entity::starship_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        starship_id: ActiveValue::Set(starship_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(favorite.insert(db).await?)
}

pub async fn insert_person_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    person_id: i32,
) -> Result<entity::person_favorite::Model, TestError> {
    let favorite = entity::person_favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        person_id: ActiveValue::Set(person_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(favorite.insert(db).await?)
}
