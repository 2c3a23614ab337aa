//! Typed errors surfaced to GraphQL clients
//!
//! Every error carries a machine-readable code alongside its message. When
//! converted into a GraphQL error the code is exposed as `extensions.code`:
//!
//! ```json
//! {
//!   "message": "No Job Found with ID: 'abc'",
//!   "extensions": { "code": "NOT_FOUND" }
//! }
//! ```
//!
//! `async_graphql::Error` has a blanket `From` impl for any `Display` type,
//! which would drop the code. Convert with [`ErrorExtensions::extend`]
//! instead of `?`.

use async_graphql::ErrorExtensions;
use std::fmt;

/// Errors returned by resolvers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobBoardError {
    /// The entity does not exist, or does not exist within the caller's scope
    NotFound { entity: EntityKind, id: String },

    /// A mutation was attempted without an authenticated caller
    Unauthorized { message: String },

    /// The data-access layer failed
    Storage { message: String },
}

/// Entity named in a [`JobBoardError::NotFound`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Job,
    Company,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Job => write!(f, "Job"),
            EntityKind::Company => write!(f, "Company"),
        }
    }
}

impl JobBoardError {
    pub fn job_not_found(id: impl Into<String>) -> Self {
        JobBoardError::NotFound {
            entity: EntityKind::Job,
            id: id.into(),
        }
    }

    pub fn company_not_found(id: impl Into<String>) -> Self {
        JobBoardError::NotFound {
            entity: EntityKind::Company,
            id: id.into(),
        }
    }

    pub fn missing_authentication() -> Self {
        JobBoardError::Unauthorized {
            message: "Missing authentication".to_string(),
        }
    }

    /// Machine-readable code exposed as `extensions.code`
    pub fn error_code(&self) -> &'static str {
        match self {
            JobBoardError::NotFound { .. } => "NOT_FOUND",
            JobBoardError::Unauthorized { .. } => "UNAUTHORIZED",
            JobBoardError::Storage { .. } => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl fmt::Display for JobBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobBoardError::NotFound { entity, id } => {
                write!(f, "No {} Found with ID: '{}'", entity, id)
            }
            JobBoardError::Unauthorized { message } => write!(f, "{}", message),
            JobBoardError::Storage { message } => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for JobBoardError {}

impl From<anyhow::Error> for JobBoardError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "data access failed");
        JobBoardError::Storage {
            message: err.to_string(),
        }
    }
}

impl ErrorExtensions for JobBoardError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, ext| ext.set("code", self.error_code()))
    }
}
