//! Holocron server core modules.
//!
//! This crate contains all backend functionality for the Holocron catalog API:
//! HTTP routing, request controllers, business-rule services, SeaORM
//! repositories, database startup and seeding, configuration, and the unified
//! error type.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
