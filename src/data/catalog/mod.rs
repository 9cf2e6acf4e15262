pub mod person;
pub mod planet;
pub mod specie;
pub mod starship;
pub mod vehicle;
