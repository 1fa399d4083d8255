//! # Repository Layer
//!
//! Repositories encapsulate the SeaORM queries behind the read API,
//! keeping handlers free of query-building details.

pub mod organisation;
pub mod vendor;

pub use organisation::OrganisationRepository;
pub use vendor::VendorRepository;
