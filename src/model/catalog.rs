//! Response and request DTOs for the five catalog entity types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: i32,
    pub gravity: f64,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            gravity: planet.gravity,
            population: planet.population,
            terrain: planet.terrain,
            climate: planet.climate,
            created_at: planet.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub diameter: i32,
    pub gravity: f64,
    pub population: i64,
    pub terrain: String,
    pub climate: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpecieDto {
    pub id: i32,
    pub name: String,
    pub height: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub language: String,
    pub average_life: i32,
    pub created_at: NaiveDateTime,
}

impl From<entity::specie::Model> for SpecieDto {
    fn from(specie: entity::specie::Model) -> Self {
        Self {
            id: specie.id,
            name: specie.name,
            height: specie.height,
            hair_color: specie.hair_color,
            skin_color: specie.skin_color,
            language: specie.language,
            average_life: specie.average_life,
            created_at: specie.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateSpecieDto {
    pub name: String,
    pub height: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub language: String,
    pub average_life: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub crew: i32,
    pub passengers: i32,
    pub class_name: String,
    pub cargo_cap: i64,
    pub consumable: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            class_name: vehicle.class_name,
            cargo_cap: vehicle.cargo_cap,
            consumable: vehicle.consumable,
            created_at: vehicle.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateVehicleDto {
    pub name: String,
    pub crew: i32,
    pub passengers: i32,
    pub class_name: String,
    pub cargo_cap: i64,
    pub consumable: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub crew: i32,
    pub passengers: i32,
    pub class_name: String,
    pub cargo_cap: i64,
    pub consumable: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            crew: starship.crew,
            passengers: starship.passengers,
            class_name: starship.class_name,
            cargo_cap: starship.cargo_cap,
            consumable: starship.consumable,
            created_at: starship.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateStarshipDto {
    pub name: String,
    pub crew: i32,
    pub passengers: i32,
    pub class_name: String,
    pub cargo_cap: i64,
    pub consumable: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
    pub height: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub gender: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::person::Model> for PersonDto {
    fn from(person: entity::person::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            hair_color: person.hair_color,
            skin_color: person.skin_color,
            eye_color: person.eye_color,
            gender: person.gender,
            created_at: person.created_at,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePersonDto {
    pub name: String,
    pub height: f64,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub gender: String,
}
