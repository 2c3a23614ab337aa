//! GraphQL API exposure
//!
//! Builds the axum router serving the job board schema. Each request gets
//! its caller context from the host's [`AuthProvider`](crate::core::AuthProvider)
//! and a fresh company loader, both attached as request data.

mod loader;
mod resolvers;
mod schema;

pub use loader::{CompanyDataLoader, CompanyLoader, company_loader};
pub use schema::{
    CreateJobInput, DeleteJobInput, JobBoardSchema, MutationRoot, QueryRoot, UpdateJobInput,
    build_schema,
};

use crate::core::AuthContext;
use crate::server::host::ServerHost;
use anyhow::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared state of the GraphQL routes
#[derive(Clone)]
struct GraphQLState {
    host: Arc<ServerHost>,
    schema: JobBoardSchema,
}

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Returns a router with:
    /// - `POST /graphql` - queries and mutations
    /// - `GET /graphql/schema` - SDL export
    /// - `GET /graphql/playground` - playground UI, unless disabled
    /// - `GET /health`, `GET /healthz` - liveness
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let schema = build_schema(host.clone());
        let playground = host.settings.playground;

        let mut router: Router<GraphQLState> = Router::new()
            .route("/graphql", post(graphql_handler))
            .route("/graphql/schema", get(graphql_sdl))
            .route("/health", get(health_check))
            .route("/healthz", get(health_check));

        if playground {
            router = router.route("/graphql/playground", get(graphql_playground));
        }

        Ok(router.with_state(GraphQLState { host, schema }))
    }

    /// Attach the caller context and a fresh company loader to a request
    pub fn prepare_request(
        host: &ServerHost,
        request: async_graphql::Request,
        auth: AuthContext,
    ) -> async_graphql::Request {
        request
            .data(auth)
            .data(company_loader(host.company_service.clone()))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let auth = match state.host.auth_provider.extract_context(&headers).await {
        Ok(auth) => auth,
        Err(e) => {
            tracing::warn!(error = %e, "failed to extract auth context, continuing anonymously");
            AuthContext::Anonymous
        }
    };

    let request = GraphQLExposure::prepare_request(&state.host, request.into_inner(), auth);
    state.schema.execute(request).await.into()
}

/// Handler for GraphQL playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Handler for GraphQL schema SDL export
async fn graphql_sdl(State(state): State<GraphQLState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.schema.sdl(),
    )
}

/// Health check endpoint handler
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "job-board"
    }))
}
