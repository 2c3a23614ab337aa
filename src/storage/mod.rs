//! Storage implementations for the data-access traits

pub mod in_memory;

pub use in_memory::{InMemoryCompanyService, InMemoryJobService, from_seed};
