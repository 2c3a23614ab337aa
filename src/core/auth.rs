//! Caller authentication for mutations
//!
//! An [`AuthProvider`] turns request headers into an [`AuthContext`] before
//! any resolver runs. Resolvers never inspect headers themselves.

use crate::core::error::JobBoardError;
use anyhow::Result;
use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};
use std::collections::HashMap;

/// Authorization context extracted from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// Authenticated user acting on behalf of a company
    Caller { user_id: String, company_id: String },

    /// No authentication (public access)
    Anonymous,
}

impl AuthContext {
    pub fn caller(user_id: impl Into<String>, company_id: impl Into<String>) -> Self {
        AuthContext::Caller {
            user_id: user_id.into(),
            company_id: company_id.into(),
        }
    }

    /// Company the caller acts for, if authenticated
    pub fn company_id(&self) -> Option<&str> {
        match self {
            AuthContext::Caller { company_id, .. } => Some(company_id),
            AuthContext::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthContext::Caller { .. })
    }

    /// Company id of the caller, or `Unauthorized` for anonymous requests
    pub fn require_company(&self) -> Result<&str, JobBoardError> {
        match self {
            AuthContext::Caller { company_id, .. } => Ok(company_id),
            AuthContext::Anonymous => Err(JobBoardError::missing_authentication()),
        }
    }
}

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Extract auth context from HTTP request headers
    async fn extract_context(&self, headers: &HeaderMap) -> Result<AuthContext>;
}

/// Default no-auth provider (for development)
///
/// Every request is anonymous, so all mutations are rejected.
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn extract_context(&self, _headers: &HeaderMap) -> Result<AuthContext> {
        Ok(AuthContext::Anonymous)
    }
}

/// Resolves `Authorization: Bearer <token>` against a fixed token table
///
/// Missing, malformed or unknown tokens yield [`AuthContext::Anonymous`].
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthProvider {
    tokens: HashMap<String, AuthContext>,
}

impl StaticTokenAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for a user of the given company
    pub fn with_token(
        mut self,
        token: impl Into<String>,
        user_id: impl Into<String>,
        company_id: impl Into<String>,
    ) -> Self {
        self.tokens
            .insert(token.into(), AuthContext::caller(user_id, company_id));
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Extract the token of an `Authorization: Bearer <token>` header
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl AuthProvider for StaticTokenAuthProvider {
    async fn extract_context(&self, headers: &HeaderMap) -> Result<AuthContext> {
        let Some(token) = bearer_token(headers) else {
            return Ok(AuthContext::Anonymous);
        };

        match self.tokens.get(token) {
            Some(context) => Ok(context.clone()),
            None => {
                tracing::warn!("rejected unknown bearer token");
                Ok(AuthContext::Anonymous)
            }
        }
    }
}
