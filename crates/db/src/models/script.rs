//! Script and script version models.

use goat_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `scripts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Script {
    pub id: DbId,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `script_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScriptVersion {
    pub id: DbId,
    pub script_id: DbId,
    pub content: String,
    pub version: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A script with its versions, newest version first.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptWithVersions {
    #[serde(flatten)]
    pub script: Script,
    pub versions: Vec<ScriptVersion>,
}
