//! Shared test scaffolding for the Holocron workspace.
//!
//! Provides an in-memory SQLite database setup with schema creation derived
//! from the entity definitions, plus fixture helpers for inserting catalog
//! rows and favorites without going through the HTTP layer.

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;
