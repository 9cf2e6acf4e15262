//! Repositories for the five favorite join tables.
//!
//! Each table is its own module with the same four operations: create,
//! find one pair, delete one pair, list by user.

pub mod person;
pub mod planet;
pub mod specie;
pub mod starship;
pub mod vehicle;
