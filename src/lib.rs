//! # Job Board
//!
//! A GraphQL API for job postings and the companies that publish them.
//!
//! ## Features
//!
//! - **Queries**: `job(id)`, `jobs`, `company(id)`
//! - **Authenticated Mutations**: `createJob`, `updateJob`, `deleteJob`, scoped
//!   to the caller's company
//! - **Batched Relations**: `Job.company` goes through a per-request loader,
//!   so N jobs of one company cost a single company lookup
//! - **Typed Errors**: `NOT_FOUND` and `UNAUTHORIZED` codes in `extensions.code`
//! - **Pluggable Storage**: resolvers only see the `JobService` and
//!   `CompanyService` traits
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use job_board::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_job_service(InMemoryJobService::new())
//!     .with_company_service(InMemoryCompanyService::new())
//!     .with_auth_provider(StaticTokenAuthProvider::new().with_token("secret", "alice", "acme"))
//!     .build()?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AuthContext, AuthProvider, Company, CompanyService, EntityKind, Job, JobBoardError,
        JobService, JobUpdate, NewJob, NoAuthProvider, StaticTokenAuthProvider,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryCompanyService, InMemoryJobService};

    // === Config ===
    pub use crate::config::{AppConfig, AuthSettings, SeedData, ServerSettings, TokenConfig};

    // === Server ===
    pub use crate::server::exposure::graphql::{JobBoardSchema, build_schema};
    pub use crate::server::{GraphQLExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
