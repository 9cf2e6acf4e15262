pub use super::person::Entity as Person;
pub use super::person_favorite::Entity as PersonFavorite;
pub use super::planet::Entity as Planet;
pub use super::planet_favorite::Entity as PlanetFavorite;
pub use super::specie::Entity as Specie;
pub use super::specie_favorite::Entity as SpecieFavorite;
pub use super::starship::Entity as Starship;
pub use super::starship_favorite::Entity as StarshipFavorite;
pub use super::user::Entity as User;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_favorite::Entity as VehicleFavorite;
