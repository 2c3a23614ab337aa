//! Data-access traits consumed by the resolvers
//!
//! Implementations own persistence. The GraphQL layer only depends on these
//! traits, so a SQL-backed store can replace the in-memory one without
//! touching any resolver.

use crate::core::entity::{Company, Job, JobUpdate, NewJob};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Service trait for managing jobs
#[async_trait]
pub trait JobService: Send + Sync {
    /// Get a job by ID
    async fn get(&self, id: &str) -> Result<Option<Job>>;

    /// List all jobs
    async fn list(&self) -> Result<Vec<Job>>;

    /// List jobs owned by a company
    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Job>>;

    /// Create a new job
    async fn create(&self, job: NewJob) -> Result<Job>;

    /// Update a job owned by `update.company_id`
    ///
    /// Returns `None` when no job matches both the id and the company, so a
    /// caller can never modify another company's posting.
    async fn update(&self, update: JobUpdate) -> Result<Option<Job>>;

    /// Delete a job owned by `company_id`, returning the removed job
    ///
    /// Returns `None` when no job matches both the id and the company.
    async fn delete(&self, id: &str, company_id: &str) -> Result<Option<Job>>;
}

/// Service trait for managing companies
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// Get a company by ID
    async fn get(&self, id: &str) -> Result<Option<Company>>;

    /// Fetch several companies in a single call
    ///
    /// Ids with no matching company are absent from the returned map.
    async fn get_many(&self, ids: &[String]) -> Result<HashMap<String, Company>>;

    /// List all companies
    async fn list(&self) -> Result<Vec<Company>>;

    /// Create a new company
    async fn create(&self, company: Company) -> Result<Company>;
}
