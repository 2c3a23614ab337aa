//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::GraphQLExposure;
use super::host::ServerHost;
use crate::config::{AppConfig, ServerSettings};
use crate::core::{AuthProvider, CompanyService, JobService, NoAuthProvider};
use crate::storage;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for creating the job board HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_job_service(InMemoryJobService::new())
///     .with_company_service(InMemoryCompanyService::new())
///     .with_auth_provider(StaticTokenAuthProvider::new().with_token("t", "alice", "acme"))
///     .build()?;
/// ```
pub struct ServerBuilder {
    job_service: Option<Arc<dyn JobService>>,
    company_service: Option<Arc<dyn CompanyService>>,
    auth_provider: Option<Arc<dyn AuthProvider>>,
    settings: ServerSettings,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            job_service: None,
            company_service: None,
            auth_provider: None,
            settings: ServerSettings::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Builder backed by in-memory stores seeded from `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let (jobs, companies) = storage::from_seed(&config.seed);

        Self::new()
            .with_job_service(jobs)
            .with_company_service(companies)
            .with_auth_provider(config.auth.provider())
            .with_settings(config.server.clone())
    }

    /// Set the job service (required)
    pub fn with_job_service(mut self, service: impl JobService + 'static) -> Self {
        self.job_service = Some(Arc::new(service));
        self
    }

    /// Set the company service (required)
    pub fn with_company_service(mut self, service: impl CompanyService + 'static) -> Self {
        self.company_service = Some(Arc::new(service));
        self
    }

    /// Set the auth provider
    ///
    /// Defaults to [`NoAuthProvider`], which rejects every mutation.
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Some(Arc::new(provider));
        self
    }

    pub fn with_settings(mut self, settings: ServerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let job_service = self
            .job_service
            .take()
            .ok_or_else(|| anyhow::anyhow!("JobService is required. Call .with_job_service()"))?;

        let company_service = self.company_service.take().ok_or_else(|| {
            anyhow::anyhow!("CompanyService is required. Call .with_company_service()")
        })?;

        let auth_provider = self
            .auth_provider
            .take()
            .unwrap_or_else(|| Arc::new(NoAuthProvider));

        Ok(ServerHost::new(
            job_service,
            company_service,
            auth_provider,
            self.settings,
        ))
    }

    /// Build the final router: GraphQL routes, custom routes and request tracing
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);

        let mut app = GraphQLExposure::build_router(host)?;
        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
