//! # Data Models
//!
//! This module contains the SeaORM entity models for the four persistent
//! tables of the SIP data layer.

pub mod organisation;
pub mod organisation_vendor;
pub mod tenant;
pub mod vendor;

pub use organisation::Entity as Organisation;
pub use organisation_vendor::Entity as OrganisationVendor;
pub use tenant::Entity as Tenant;
pub use vendor::Entity as Vendor;
