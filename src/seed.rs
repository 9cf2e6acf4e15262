//! Startup seeding for the catalog tables.
//!
//! Each catalog table gets five fixture rows, inserted only when the table
//! is empty, so re-running on every boot never duplicates data. Users and
//! favorites are never seeded.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

fn planet_fixtures() -> Vec<entity::planet::ActiveModel> {
    let rows = [
        ("Tatooine", 10465, 1.0, 200_000_i64, "desert", "arid"),
        ("Coruscant", 12240, 1.0, 100_000_000, "urban", "temperate"),
        ("Hoth", 7200, 1.1, 0, "tundra", "frozen"),
        ("Endor", 4900, 0.85, 30_000_000, "forests, mountains", "temperate"),
        ("Mustafar", 4200, 1.2, 20_000, "volcanic", "hot"),
    ];

    rows.into_iter()
        .map(
            |(name, diameter, gravity, population, terrain, climate)| entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(diameter),
                gravity: ActiveValue::Set(gravity),
                population: ActiveValue::Set(population),
                terrain: ActiveValue::Set(terrain.to_string()),
                climate: ActiveValue::Set(climate.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .collect()
}

fn specie_fixtures() -> Vec<entity::specie::ActiveModel> {
    let rows = [
        ("Human", 1.75, "varied", "varied", "Galactic Basic", 100),
        ("Wookiee", 2.2, "brown", "brown", "Shyriiwook", 400),
        ("Twi'lek", 1.8, "varied", "blue, green, red, yellow", "Twi'leki", 85),
        ("Rodian", 1.7, "none", "green", "Rodese", 70),
        ("Mon Calamari", 1.6, "none", "orange, red", "Mon Calamarian", 80),
    ];

    rows.into_iter()
        .map(
            |(name, height, hair_color, skin_color, language, average_life)| {
                entity::specie::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    height: ActiveValue::Set(height),
                    hair_color: ActiveValue::Set(hair_color.to_string()),
                    skin_color: ActiveValue::Set(skin_color.to_string()),
                    language: ActiveValue::Set(language.to_string()),
                    average_life: ActiveValue::Set(average_life),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        )
        .collect()
}

fn vehicle_fixtures() -> Vec<entity::vehicle::ActiveModel> {
    let rows = [
        ("X-wing", 1, 0, "Starfighter", 110_i64, "1 week"),
        ("TIE Fighter", 1, 0, "Starfighter", 65, "2 days"),
        ("Millennium Falcon", 4, 6, "Light Freighter", 100_000, "2 months"),
        ("AT-AT", 5, 40, "Walker", 1000, "1 week"),
        ("Speeder Bike", 1, 1, "Speeder", 20, "1 day"),
    ];

    rows.into_iter()
        .map(
            |(name, crew, passengers, class_name, cargo_cap, consumable)| {
                entity::vehicle::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    crew: ActiveValue::Set(crew),
                    passengers: ActiveValue::Set(passengers),
                    class_name: ActiveValue::Set(class_name.to_string()),
                    cargo_cap: ActiveValue::Set(cargo_cap),
                    consumable: ActiveValue::Set(consumable.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        )
        .collect()
}

fn starship_fixtures() -> Vec<entity::starship::ActiveModel> {
    let rows = [
        ("X-wing", 1, 0, "Starfighter", 110_i64, "1 week"),
        ("TIE Fighter", 1, 0, "Starfighter", 65, "2 days"),
        ("Millennium Falcon", 4, 6, "Light Freighter", 100_000, "2 months"),
        ("Star Destroyer", 47_060, 0, "Capital Ship", 36_000_000, "2 years"),
        ("Slave I", 1, 6, "Patrol Ship", 70_000, "1 month"),
    ];

    rows.into_iter()
        .map(
            |(name, crew, passengers, class_name, cargo_cap, consumable)| {
                entity::starship::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    crew: ActiveValue::Set(crew),
                    passengers: ActiveValue::Set(passengers),
                    class_name: ActiveValue::Set(class_name.to_string()),
                    cargo_cap: ActiveValue::Set(cargo_cap),
                    consumable: ActiveValue::Set(consumable.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        )
        .collect()
}

fn person_fixtures() -> Vec<entity::person::ActiveModel> {
    let rows = [
        ("Luke Skywalker", 1.72, "Blond", "Fair", "Blue", "Male"),
        ("Darth Vader", 2.03, "None", "Pale", "Yellow", "Male"),
        ("Leia Organa", 1.50, "Brown", "Fair", "Brown", "Female"),
        ("Yoda", 0.66, "White", "Green", "Brown", "Male"),
        ("Chewbacca", 2.28, "Brown", "Brown", "Blue", "Male"),
    ];

    rows.into_iter()
        .map(
            |(name, height, hair_color, skin_color, eye_color, gender)| {
                entity::person::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    height: ActiveValue::Set(height),
                    hair_color: ActiveValue::Set(hair_color.to_string()),
                    skin_color: ActiveValue::Set(skin_color.to_string()),
                    eye_color: ActiveValue::Set(eye_color.to_string()),
                    gender: ActiveValue::Set(gender.to_string()),
                    created_at: ActiveValue::Set(Utc::now().naive_utc()),
                    ..Default::default()
                }
            },
        )
        .collect()
}

/// Inserts fixture rows into every empty catalog table.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    if entity::prelude::Planet::find().one(db).await?.is_none() {
        entity::prelude::Planet::insert_many(planet_fixtures())
            .exec(db)
            .await?;
        tracing::info!("Seeded planet table");
    }

    if entity::prelude::Specie::find().one(db).await?.is_none() {
        entity::prelude::Specie::insert_many(specie_fixtures())
            .exec(db)
            .await?;
        tracing::info!("Seeded specie table");
    }

    if entity::prelude::Vehicle::find().one(db).await?.is_none() {
        entity::prelude::Vehicle::insert_many(vehicle_fixtures())
            .exec(db)
            .await?;
        tracing::info!("Seeded vehicle table");
    }

    if entity::prelude::Starship::find().one(db).await?.is_none() {
        entity::prelude::Starship::insert_many(starship_fixtures())
            .exec(db)
            .await?;
        tracing::info!("Seeded starship table");
    }

    if entity::prelude::Person::find().one(db).await?.is_none() {
        entity::prelude::Person::insert_many(person_fixtures())
            .exec(db)
            .await?;
        tracing::info!("Seeded person table");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use holocron_test_utils::{test_setup_with_catalog_tables, TestError};
    use sea_orm::EntityTrait;

    use super::seed_database;

    /// Seeding an empty database should fill every catalog table
    #[tokio::test]
    async fn seed_fills_empty_tables() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;

        seed_database(&test.db).await?;

        assert_eq!(entity::prelude::Planet::find().all(&test.db).await?.len(), 5);
        assert_eq!(entity::prelude::Specie::find().all(&test.db).await?.len(), 5);
        assert_eq!(entity::prelude::Vehicle::find().all(&test.db).await?.len(), 5);
        assert_eq!(
            entity::prelude::Starship::find().all(&test.db).await?.len(),
            5
        );
        assert_eq!(entity::prelude::Person::find().all(&test.db).await?.len(), 5);

        Ok(())
    }

    /// Seeding twice should not duplicate any rows
    #[tokio::test]
    async fn seed_is_idempotent() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;

        seed_database(&test.db).await?;
        seed_database(&test.db).await?;

        assert_eq!(entity::prelude::Planet::find().all(&test.db).await?.len(), 5);
        assert_eq!(entity::prelude::Person::find().all(&test.db).await?.len(), 5);

        Ok(())
    }

    /// Users are never part of the seed
    #[tokio::test]
    async fn seed_skips_users() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;

        seed_database(&test.db).await?;

        assert!(entity::prelude::User::find().one(&test.db).await?.is_none());

        Ok(())
    }
}
