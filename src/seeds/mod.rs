//! Database seeding
//!
//! Populates the store with the reference dataset the demo expects.
//! Seeding happens on demand through the API or the `seed` CLI command.

pub mod reference;

pub use reference::{
    reference_dataset, seed_dataset, seed_reference_data, LinkSeed, OrganisationSeed, SeedDataset,
    SeedSummary, VendorSeed, DEFAULT_TENANT,
};
