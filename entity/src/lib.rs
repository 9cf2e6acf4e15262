pub mod prelude;

pub mod person;
pub mod person_favorite;
pub mod planet;
pub mod planet_favorite;
pub mod specie;
pub mod specie_favorite;
pub mod starship;
pub mod starship_favorite;
pub mod user;
pub mod vehicle;
pub mod vehicle_favorite;
