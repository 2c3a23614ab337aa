//! Server host for transport-agnostic API exposure
//!
//! The host holds the services and settings every exposure needs. It knows
//! nothing about GraphQL or HTTP.

use crate::config::ServerSettings;
use crate::core::{AuthProvider, CompanyService, JobService};
use std::sync::Arc;

/// Host context containing all application state
pub struct ServerHost {
    /// Job data access
    pub job_service: Arc<dyn JobService>,

    /// Company data access
    pub company_service: Arc<dyn CompanyService>,

    /// Turns request headers into a caller context
    pub auth_provider: Arc<dyn AuthProvider>,

    pub settings: ServerSettings,
}

impl ServerHost {
    pub fn new(
        job_service: Arc<dyn JobService>,
        company_service: Arc<dyn CompanyService>,
        auth_provider: Arc<dyn AuthProvider>,
        settings: ServerSettings,
    ) -> Self {
        Self {
            job_service,
            company_service,
            auth_provider,
            settings,
        }
    }
}
