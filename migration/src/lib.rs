pub use sea_orm_migration::prelude::*;

mod m20260815_000001_user;
mod m20260815_000002_planet;
mod m20260815_000003_specie;
mod m20260815_000004_vehicle;
mod m20260815_000005_starship;
mod m20260815_000006_person;
mod m20260815_000007_planet_favorite;
mod m20260815_000008_specie_favorite;
mod m20260815_000009_vehicle_favorite;
mod m20260815_000010_starship_favorite;
mod m20260815_000011_person_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_user::Migration),
            Box::new(m20260815_000002_planet::Migration),
            Box::new(m20260815_000003_specie::Migration),
            Box::new(m20260815_000004_vehicle::Migration),
            Box::new(m20260815_000005_starship::Migration),
            Box::new(m20260815_000006_person::Migration),
            Box::new(m20260815_000007_planet_favorite::Migration),
            Box::new(m20260815_000008_specie_favorite::Migration),
            Box::new(m20260815_000009_vehicle_favorite::Migration),
            Box::new(m20260815_000010_starship_favorite::Migration),
            Box::new(m20260815_000011_person_favorite::Migration),
        ]
    }
}
