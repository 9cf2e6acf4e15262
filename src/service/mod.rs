//! Business rules sitting between controllers and repositories.
//!
//! Services own the checks the schema alone cannot express politely:
//! uniqueness lookups before insert so the client gets a 409 instead of a
//! raw constraint violation, and existence checks so favorites can 404 on
//! either side of the pair.

pub mod catalog;
pub mod favorite;
pub mod user;
