//! SeaORM repositories, one per table.
//!
//! Repositories hold a borrowed `DatabaseConnection` and expose the narrow
//! set of queries the services need. They return `DbErr` directly; mapping
//! to HTTP-facing errors happens a layer up.

pub mod catalog;
pub mod favorite;
pub mod user;
