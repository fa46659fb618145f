//! Pure domain logic for the GOAT Media agency backend.
//!
//! Nothing in this crate touches the network or the database: it holds the
//! shared id/timestamp types, the [`error::CoreError`] taxonomy, the status
//! vocabularies and their validators, and the small computations behind the
//! reporting endpoints.

pub mod auth;
pub mod content_studio;
pub mod editing;
pub mod error;
pub mod invoice;
pub mod lead;
pub mod notification;
pub mod performance;
pub mod revenue;
pub mod roles;
pub mod script;
pub mod shoot;
pub mod task;
pub mod types;
pub mod validation;
