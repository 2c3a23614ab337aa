//! Resolver map for queries, mutations and relation fields
//!
//! These functions hold the behavior behind each GraphQL field. They depend
//! only on the service traits and the caller's [`AuthContext`], which keeps
//! them independent of the GraphQL engine.

use super::loader::CompanyDataLoader;
use crate::core::{
    AuthContext, Company, CompanyService, Job, JobBoardError, JobService, JobUpdate, NewJob,
};

type Result<T> = std::result::Result<T, JobBoardError>;

/// `Query.job(id)`
pub async fn job(jobs: &dyn JobService, id: &str) -> Result<Job> {
    jobs.get(id)
        .await?
        .ok_or_else(|| JobBoardError::job_not_found(id))
}

/// `Query.jobs`
pub async fn jobs(jobs: &dyn JobService) -> Result<Vec<Job>> {
    Ok(jobs.list().await?)
}

/// `Query.company(id)`
pub async fn company(companies: &dyn CompanyService, id: &str) -> Result<Company> {
    companies
        .get(id)
        .await?
        .ok_or_else(|| JobBoardError::company_not_found(id))
}

/// `Mutation.createJob`: the new job belongs to the caller's company
pub async fn create_job(
    jobs: &dyn JobService,
    auth: &AuthContext,
    title: String,
    description: Option<String>,
) -> Result<Job> {
    let company_id = auth.require_company()?;

    let job = jobs
        .create(NewJob {
            company_id: company_id.to_string(),
            title,
            description,
        })
        .await?;

    tracing::debug!(job_id = %job.id, company_id, "job created");
    Ok(job)
}

/// `Mutation.updateJob`, restricted to jobs of the caller's company
pub async fn update_job(
    jobs: &dyn JobService,
    auth: &AuthContext,
    id: String,
    title: String,
    description: Option<String>,
) -> Result<Job> {
    let company_id = auth.require_company()?;

    let updated = jobs
        .update(JobUpdate {
            id: id.clone(),
            company_id: company_id.to_string(),
            title,
            description,
        })
        .await?;

    match updated {
        Some(job) => {
            tracing::debug!(job_id = %job.id, company_id, "job updated");
            Ok(job)
        }
        None => Err(JobBoardError::job_not_found(id)),
    }
}

/// `Mutation.deleteJob`, restricted to jobs of the caller's company
pub async fn delete_job(jobs: &dyn JobService, auth: &AuthContext, id: &str) -> Result<Job> {
    let company_id = auth.require_company()?;

    match jobs.delete(id, company_id).await? {
        Some(job) => {
            tracing::debug!(job_id = %job.id, company_id, "job deleted");
            Ok(job)
        }
        None => Err(JobBoardError::job_not_found(id)),
    }
}

/// `Job.company`, batched through the request's loader
pub async fn job_company(loader: &CompanyDataLoader, job: &Job) -> Result<Company> {
    loader
        .load_one(job.company_id.clone())
        .await?
        .ok_or_else(|| JobBoardError::company_not_found(&job.company_id))
}

/// `Company.jobs`
pub async fn company_jobs(jobs: &dyn JobService, company: &Company) -> Result<Vec<Job>> {
    Ok(jobs.list_by_company(&company.id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::exposure::graphql::loader::company_loader;
    use crate::storage::{InMemoryCompanyService, InMemoryJobService};
    use std::sync::Arc;

    fn acme() -> Company {
        Company {
            id: "acme".to_string(),
            name: "Acme".to_string(),
            description: None,
        }
    }

    fn seeded_job(id: &str, company_id: &str) -> Job {
        Job {
            id: id.to_string(),
            company_id: company_id.to_string(),
            title: format!("Job {}", id),
            description: None,
            created_at: "2023-05-01T12:00:00Z".to_string(),
        }
    }

    fn alice() -> AuthContext {
        AuthContext::caller("alice", "acme")
    }

    #[tokio::test]
    async fn test_job_found_and_not_found() {
        let service = InMemoryJobService::from_jobs(vec![seeded_job("j1", "acme")]);

        assert_eq!(job(&service, "j1").await.unwrap().id, "j1");
        assert_eq!(
            job(&service, "nope").await.unwrap_err(),
            JobBoardError::job_not_found("nope")
        );
    }

    #[tokio::test]
    async fn test_company_found_and_not_found() {
        let service = InMemoryCompanyService::from_companies(vec![acme()]);

        assert_eq!(company(&service, "acme").await.unwrap(), acme());
        assert_eq!(
            company(&service, "nope").await.unwrap_err(),
            JobBoardError::company_not_found("nope")
        );
    }

    #[tokio::test]
    async fn test_create_job_requires_caller() {
        let service = InMemoryJobService::new();

        let err = create_job(&service, &AuthContext::Anonymous, "T".into(), None)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
        assert!(service.list().await.unwrap().is_empty());

        let created = create_job(&service, &alice(), "T".into(), Some("D".into()))
            .await
            .unwrap();
        assert_eq!(created.company_id, "acme");
        assert_eq!(created.description.as_deref(), Some("D"));
    }

    #[tokio::test]
    async fn test_update_job_scoping() {
        let service = InMemoryJobService::from_jobs(vec![seeded_job("j1", "globex")]);

        let err = update_job(&service, &AuthContext::Anonymous, "j1".into(), "X".into(), None)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");

        let err = update_job(&service, &alice(), "j1".into(), "X".into(), None)
            .await
            .unwrap_err();
        assert_eq!(err, JobBoardError::job_not_found("j1"));

        let bob = AuthContext::caller("bob", "globex");
        let updated = update_job(&service, &bob, "j1".into(), "X".into(), None)
            .await
            .unwrap();
        assert_eq!(updated.title, "X");
    }

    #[tokio::test]
    async fn test_delete_job_scoping() {
        let service = InMemoryJobService::from_jobs(vec![seeded_job("j1", "acme")]);

        let err = delete_job(&service, &AuthContext::Anonymous, "j1")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");

        let bob = AuthContext::caller("bob", "globex");
        let err = delete_job(&service, &bob, "j1").await.unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");

        let deleted = delete_job(&service, &alice(), "j1").await.unwrap();
        assert_eq!(deleted.id, "j1");
        assert!(service.get("j1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_job_company_via_loader() {
        let loader = company_loader(Arc::new(InMemoryCompanyService::from_companies(vec![acme()])));

        let resolved = job_company(&loader, &seeded_job("j1", "acme")).await.unwrap();
        assert_eq!(resolved, acme());

        let err = job_company(&loader, &seeded_job("j2", "ghost"))
            .await
            .unwrap_err();
        assert_eq!(err, JobBoardError::company_not_found("ghost"));
    }

    #[tokio::test]
    async fn test_company_jobs_filters_by_company() {
        let service = InMemoryJobService::from_jobs(vec![
            seeded_job("j1", "acme"),
            seeded_job("j2", "globex"),
            seeded_job("j3", "acme"),
        ]);

        let ids: Vec<String> = company_jobs(&service, &acme())
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(ids, vec!["j1", "j3"]);
    }
}
