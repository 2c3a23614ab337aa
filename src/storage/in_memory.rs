//! In-memory implementations of JobService and CompanyService

use crate::config::SeedData;
use crate::core::{Company, CompanyService, Job, JobService, JobUpdate, NewJob};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory job service implementation
///
/// Jobs are kept in insertion order, so listings are stable. Uses RwLock for
/// thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryJobService {
    jobs: Arc<RwLock<IndexMap<String, Job>>>,
}

impl InMemoryJobService {
    /// Create a new, empty in-memory job service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with jobs
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job>) -> Self {
        let jobs = jobs.into_iter().map(|job| (job.id.clone(), job)).collect();
        Self {
            jobs: Arc::new(RwLock::new(jobs)),
        }
    }
}

#[async_trait]
impl JobService for InMemoryJobService {
    async fn get(&self, id: &str) -> Result<Option<Job>> {
        let jobs = self
            .jobs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(jobs.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Job>> {
        let jobs = self
            .jobs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(jobs.values().cloned().collect())
    }

    async fn list_by_company(&self, company_id: &str) -> Result<Vec<Job>> {
        let jobs = self
            .jobs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(jobs
            .values()
            .filter(|job| job.company_id == company_id)
            .cloned()
            .collect())
    }

    async fn create(&self, job: NewJob) -> Result<Job> {
        let job = job.into_job();

        let mut jobs = self
            .jobs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        jobs.insert(job.id.clone(), job.clone());

        Ok(job)
    }

    async fn update(&self, update: JobUpdate) -> Result<Option<Job>> {
        let mut jobs = self
            .jobs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let Some(job) = jobs
            .get_mut(&update.id)
            .filter(|job| job.company_id == update.company_id)
        else {
            return Ok(None);
        };

        job.title = update.title;
        job.description = update.description;

        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: &str, company_id: &str) -> Result<Option<Job>> {
        let mut jobs = self
            .jobs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if !jobs.get(id).is_some_and(|job| job.company_id == company_id) {
            return Ok(None);
        }

        Ok(jobs.shift_remove(id))
    }
}

/// In-memory company service implementation
#[derive(Clone, Default)]
pub struct InMemoryCompanyService {
    companies: Arc<RwLock<IndexMap<String, Company>>>,
}

impl InMemoryCompanyService {
    /// Create a new, empty in-memory company service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service pre-populated with companies
    pub fn from_companies(companies: impl IntoIterator<Item = Company>) -> Self {
        let companies = companies
            .into_iter()
            .map(|company| (company.id.clone(), company))
            .collect();
        Self {
            companies: Arc::new(RwLock::new(companies)),
        }
    }
}

#[async_trait]
impl CompanyService for InMemoryCompanyService {
    async fn get(&self, id: &str) -> Result<Option<Company>> {
        let companies = self
            .companies
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(companies.get(id).cloned())
    }

    async fn get_many(&self, ids: &[String]) -> Result<HashMap<String, Company>> {
        let companies = self
            .companies
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(ids
            .iter()
            .filter_map(|id| companies.get(id).map(|c| (id.clone(), c.clone())))
            .collect())
    }

    async fn list(&self) -> Result<Vec<Company>> {
        let companies = self
            .companies
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(companies.values().cloned().collect())
    }

    async fn create(&self, company: Company) -> Result<Company> {
        let mut companies = self
            .companies
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        companies.insert(company.id.clone(), company.clone());

        Ok(company)
    }
}

/// Build both stores from configured seed data
pub fn from_seed(seed: &SeedData) -> (InMemoryJobService, InMemoryCompanyService) {
    (
        InMemoryJobService::from_jobs(seed.jobs.iter().cloned()),
        InMemoryCompanyService::from_companies(seed.companies.iter().cloned()),
    )
}
