//! Configuration loading and management

use crate::core::{Company, Job, StaticTokenAuthProvider};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default listen address of the HTTP server
pub const DEFAULT_BIND: &str = "127.0.0.1:9000";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("seed job '{job_id}' references unknown company '{company_id}'")]
    InvalidSeed { job_id: String, company_id: String },

    #[error("token of user '{user_id}' references unknown company '{company_id}'")]
    UnknownTokenCompany { user_id: String, company_id: String },
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSettings {
    /// Socket address to bind (e.g., "0.0.0.0:9000")
    pub bind: String,

    /// Serve the GraphQL playground at `/graphql/playground`
    pub playground: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            playground: true,
        }
    }
}

/// A bearer token granted to a user of a company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenConfig {
    pub token: String,
    pub user_id: String,
    pub company_id: String,
}

/// Authentication settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSettings {
    pub tokens: Vec<TokenConfig>,
}

impl AuthSettings {
    /// Build a token provider from the configured tokens
    pub fn provider(&self) -> StaticTokenAuthProvider {
        self.tokens
            .iter()
            .fold(StaticTokenAuthProvider::new(), |provider, t| {
                provider.with_token(&t.token, &t.user_id, &t.company_id)
            })
    }
}

/// Initial content of the in-memory stores
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeedData {
    pub companies: Vec<Company>,
    pub jobs: Vec<Job>,
}

impl SeedData {
    /// Ids of the seeded companies
    pub fn company_ids(&self) -> HashSet<&str> {
        self.companies.iter().map(|c| c.id.as_str()).collect()
    }

    /// Check that every seeded job belongs to a seeded company
    pub fn validate(&self) -> Result<(), ConfigError> {
        let company_ids = self.company_ids();

        match self
            .jobs
            .iter()
            .find(|job| !company_ids.contains(job.company_id.as_str()))
        {
            Some(job) => Err(ConfigError::InvalidSeed {
                job_id: job.id.clone(),
                company_id: job.company_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub auth: AuthSettings,
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that seeded jobs and auth tokens only reference seeded companies
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.seed.validate()?;

        let company_ids = self.seed.company_ids();
        match self
            .auth
            .tokens
            .iter()
            .find(|t| !company_ids.contains(t.company_id.as_str()))
        {
            Some(t) => Err(ConfigError::UnknownTokenCompany {
                user_id: t.user_id.clone(),
                company_id: t.company_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
server:
  bind: "0.0.0.0:8080"
  playground: false
auth:
  tokens:
    - token: "acme-secret"
      user_id: "alice"
      company_id: "acme"
seed:
  companies:
    - id: "acme"
      name: "Acme"
      description: "Anvils"
  jobs:
    - id: "j1"
      company_id: "acme"
      title: "Engineer"
      created_at: "2023-05-01T12:00:00.000Z"
"#;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert!(config.server.playground);
        assert!(config.auth.tokens.is_empty());
        assert!(config.seed.companies.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_yaml_str(SAMPLE).unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert!(!config.server.playground);
        assert_eq!(config.auth.tokens.len(), 1);
        assert_eq!(config.seed.companies[0].description.as_deref(), Some("Anvils"));
        assert_eq!(config.seed.jobs[0].description, None);
        assert_eq!(config.auth.provider().len(), 1);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  playground: false\n").unwrap();
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert!(!config.server.playground);
        assert!(config.seed.jobs.is_empty());
    }

    #[test]
    fn test_seed_job_with_unknown_company_is_rejected() {
        let yaml = r#"
seed:
  jobs:
    - id: "j1"
      company_id: "ghost"
      title: "Engineer"
      created_at: "2023-05-01T12:00:00.000Z"
"#;
        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSeed { ref job_id, ref company_id }
                if job_id == "j1" && company_id == "ghost"
        ));
    }

    #[test]
    fn test_token_with_unknown_company_is_rejected() {
        let yaml = r#"
auth:
  tokens:
    - token: "ghost-token"
      user_id: "casper"
      company_id: "ghost"
seed:
  companies:
    - id: "acme"
      name: "Acme"
"#;
        let err = AppConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownTokenCompany { ref user_id, ref company_id }
                if user_id == "casper" && company_id == "ghost"
        ));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_tokens_without_seeded_companies_are_rejected() {
        let yaml = r#"
auth:
  tokens:
    - token: "acme-secret"
      user_id: "alice"
      company_id: "acme"
"#;
        assert!(matches!(
            AppConfig::from_yaml_str(yaml),
            Err(ConfigError::UnknownTokenCompany { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = AppConfig::from_yaml_str("server: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = AppConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.seed.jobs.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::from_yaml_file("/nonexistent/job-board.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/job-board.yaml"));
    }
}
