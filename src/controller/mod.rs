pub mod favorite;
pub mod person;
pub mod planet;
pub mod specie;
pub mod starship;
pub mod user;
pub mod vehicle;
