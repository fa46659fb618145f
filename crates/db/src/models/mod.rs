//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Response shapes that embed related rows, where the API needs them

pub mod client;
pub mod editing;
pub mod expense;
pub mod faq;
pub mod invoice;
pub mod lead;
pub mod notification;
pub mod project;
pub mod report;
pub mod script;
pub mod shoot;
pub mod task;
pub mod user;
