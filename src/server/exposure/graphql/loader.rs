//! Per-request batching of company lookups
//!
//! Every GraphQL request gets its own [`DataLoader`]. Sibling `Job.company`
//! fields resolved in the same request are coalesced into a single
//! [`CompanyService::get_many`] call, and repeated ids are served from the
//! request-local cache. Nothing is shared between requests.

use async_graphql::dataloader::{DataLoader, HashMapCache, Loader};
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{Company, CompanyService, JobBoardError};

/// Batch loader for companies keyed by id
pub struct CompanyLoader {
    companies: Arc<dyn CompanyService>,
}

impl CompanyLoader {
    pub fn new(companies: Arc<dyn CompanyService>) -> Self {
        Self { companies }
    }
}

impl Loader<String> for CompanyLoader {
    type Value = Company;
    type Error = JobBoardError;

    async fn load(&self, keys: &[String]) -> Result<HashMap<String, Company>, JobBoardError> {
        tracing::debug!(keys = keys.len(), "batch loading companies");
        Ok(self.companies.get_many(keys).await?)
    }
}

/// Request-scoped company loader with a per-request cache
pub type CompanyDataLoader = DataLoader<CompanyLoader, HashMapCache>;

/// Create a fresh, request-scoped company loader
pub fn company_loader(companies: Arc<dyn CompanyService>) -> CompanyDataLoader {
    DataLoader::with_cache(
        CompanyLoader::new(companies),
        tokio::spawn,
        HashMapCache::default(),
    )
}
