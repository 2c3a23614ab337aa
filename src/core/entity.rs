//! Domain entities exposed by the job board: jobs and the companies that post them

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the `yyyy-mm-dd` prefix of an RFC 3339 timestamp
const ISO_DATE_LEN: usize = "yyyy-mm-dd".len();

/// A company publishing job postings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

impl Company {
    /// Create a company with a freshly generated id
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description,
        }
    }
}

/// A job posting, always owned by exactly one company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    /// Unique identifier
    pub id: String,

    /// Owning company. Never changes after creation.
    pub company_id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// RFC 3339 creation timestamp, e.g. `2023-05-01T12:00:00.000Z`
    pub created_at: String,
}

impl Job {
    /// Calendar date of creation (`yyyy-mm-dd`)
    ///
    /// This only truncates the stored timestamp; values shorter than a date
    /// are returned as-is.
    pub fn iso_date(&self) -> &str {
        match self.created_at.char_indices().nth(ISO_DATE_LEN) {
            Some((end, _)) => &self.created_at[..end],
            None => &self.created_at,
        }
    }
}

/// Fields required to create a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub company_id: String,
    pub title: String,
    pub description: Option<String>,
}

impl NewJob {
    /// Materialize the job with a new id and the current timestamp
    pub fn into_job(self) -> Job {
        Job {
            id: Uuid::new_v4().to_string(),
            company_id: self.company_id,
            title: self.title,
            description: self.description,
            created_at: now_timestamp(),
        }
    }
}

/// Changes applied to an existing job, scoped to its owning company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobUpdate {
    pub id: String,
    pub company_id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Current UTC time in the timestamp format used for `Job::created_at`
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_created_at(created_at: &str) -> Job {
        Job {
            id: "job-1".to_string(),
            company_id: "acme".to_string(),
            title: "Engineer".to_string(),
            description: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_date_truncates_timestamp() {
        assert_eq!(job_created_at("2023-05-01T12:00:00Z").iso_date(), "2023-05-01");
        assert_eq!(
            job_created_at("2024-12-31T23:59:59.999Z").iso_date(),
            "2024-12-31"
        );
    }

    #[test]
    fn test_date_of_bare_date_is_unchanged() {
        assert_eq!(job_created_at("2023-05-01").iso_date(), "2023-05-01");
    }

    #[test]
    fn test_date_of_short_value_does_not_panic() {
        assert_eq!(job_created_at("2023").iso_date(), "2023");
        assert_eq!(job_created_at("").iso_date(), "");
    }

    #[test]
    fn test_new_job_into_job() {
        let job = NewJob {
            company_id: "acme".to_string(),
            title: "Engineer".to_string(),
            description: Some("Build things".to_string()),
        }
        .into_job();

        assert_eq!(job.company_id, "acme");
        assert_eq!(job.title, "Engineer");
        assert!(Uuid::parse_str(&job.id).is_ok());
        assert!(job.created_at.ends_with('Z'));
        assert_eq!(job.iso_date().len(), 10);
    }

    #[test]
    fn test_now_timestamp_is_rfc3339() {
        let ts = now_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_company_new_generates_id() {
        let a = Company::new("Acme", None);
        let b = Company::new("Acme", None);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Acme");
    }

    #[test]
    fn test_job_deserializes_without_description() {
        let job: Job = serde_json::from_value(serde_json::json!({
            "id": "j1",
            "company_id": "acme",
            "title": "Engineer",
            "created_at": "2023-05-01T12:00:00Z"
        }))
        .unwrap();
        assert_eq!(job.description, None);
    }
}
