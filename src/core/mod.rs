//! Core module containing the domain model, service traits and errors

pub mod auth;
pub mod entity;
pub mod error;
pub mod service;

pub use auth::{AuthContext, AuthProvider, NoAuthProvider, StaticTokenAuthProvider};
pub use entity::{Company, Job, JobUpdate, NewJob};
pub use error::{EntityKind, JobBoardError};
pub use service::{CompanyService, JobService};
