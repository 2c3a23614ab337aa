//! GraphQL schema: query and mutation roots plus the `Job` and `Company` types
//!
//! Each field delegates to [`resolvers`](super::resolvers) and converts the
//! typed error into a GraphQL error carrying `extensions.code`.

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, ID, InputObject, Object, Result, Schema,
};
use std::sync::Arc;

use super::loader::CompanyDataLoader;
use super::resolvers;
use crate::core::{AuthContext, Company, Job};
use crate::server::host::ServerHost;

/// Schema served at `/graphql`
pub type JobBoardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Requests executed without an auth context are anonymous
static ANONYMOUS: AuthContext = AuthContext::Anonymous;

fn host<'a>(ctx: &Context<'a>) -> Result<&'a Arc<ServerHost>> {
    ctx.data::<Arc<ServerHost>>()
}

fn auth<'a>(ctx: &Context<'a>) -> &'a AuthContext {
    ctx.data_opt::<AuthContext>().unwrap_or(&ANONYMOUS)
}

/// Build the schema over the services of `host`
pub fn build_schema(host: Arc<ServerHost>) -> JobBoardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(host)
        .finish()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up a single job
    async fn job(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Job>> {
        resolvers::job(host(ctx)?.job_service.as_ref(), &id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }

    /// All jobs, oldest first
    async fn jobs(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Job>>>> {
        let jobs = resolvers::jobs(host(ctx)?.job_service.as_ref())
            .await
            .map_err(|e| e.extend())?;
        Ok(Some(jobs.into_iter().map(Some).collect()))
    }

    /// Look up a single company
    async fn company(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Company>> {
        resolvers::company(host(ctx)?.company_service.as_ref(), &id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }
}

#[derive(InputObject)]
pub struct CreateJobInput {
    pub title: String,
    pub description: Option<String>,
}

#[derive(InputObject)]
pub struct UpdateJobInput {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
}

#[derive(InputObject)]
pub struct DeleteJobInput {
    pub id: ID,
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Post a job for the caller's company
    async fn create_job(&self, ctx: &Context<'_>, input: CreateJobInput) -> Result<Option<Job>> {
        resolvers::create_job(
            host(ctx)?.job_service.as_ref(),
            auth(ctx),
            input.title,
            input.description,
        )
        .await
        .map(Some)
        .map_err(|e| e.extend())
    }

    /// Edit a job of the caller's company
    async fn update_job(&self, ctx: &Context<'_>, input: UpdateJobInput) -> Result<Option<Job>> {
        resolvers::update_job(
            host(ctx)?.job_service.as_ref(),
            auth(ctx),
            input.id.0,
            input.title,
            input.description,
        )
        .await
        .map(Some)
        .map_err(|e| e.extend())
    }

    /// Remove a job of the caller's company, returning it
    async fn delete_job(&self, ctx: &Context<'_>, input: DeleteJobInput) -> Result<Option<Job>> {
        resolvers::delete_job(host(ctx)?.job_service.as_ref(), auth(ctx), &input.id)
            .await
            .map(Some)
            .map_err(|e| e.extend())
    }
}

#[Object(name = "Job")]
impl Job {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Creation date as `yyyy-mm-dd`
    async fn date(&self) -> &str {
        self.iso_date()
    }

    /// Owning company, batched per request
    async fn company(&self, ctx: &Context<'_>) -> Result<Company> {
        let loader = ctx.data::<CompanyDataLoader>()?;
        resolvers::job_company(loader, self)
            .await
            .map_err(|e| e.extend())
    }
}

#[Object(name = "Company")]
impl Company {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Jobs posted by this company
    async fn jobs(&self, ctx: &Context<'_>) -> Result<Vec<Job>> {
        resolvers::company_jobs(host(ctx)?.job_service.as_ref(), self)
            .await
            .map_err(|e| e.extend())
    }
}
