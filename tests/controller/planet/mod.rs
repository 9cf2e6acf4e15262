pub mod create_planet;
pub mod get_planet;
pub mod get_planets;
