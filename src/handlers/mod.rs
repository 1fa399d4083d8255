//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the SIP API.

pub mod health;
pub mod organisations;
pub mod seed;
pub mod vendors;

pub use health::health;
pub use organisations::list_organisations;
pub use seed::seed_database;
pub use vendors::list_vendors;
