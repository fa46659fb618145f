//! Repository for the `script_versions` table.

use std::collections::HashMap;

use goat_core::script::next_version;
use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::script::ScriptVersion;

const COLUMNS: &str = "id, script_id, content, version, created_at, updated_at";

/// Provides version-management operations for scripts.
pub struct ScriptVersionRepo;

impl ScriptVersionRepo {
    /// List a script's versions, highest version first.
    pub async fn list_by_script(
        pool: &PgPool,
        script_id: DbId,
    ) -> Result<Vec<ScriptVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM script_versions
             WHERE script_id = $1
             ORDER BY version DESC"
        );
        sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(script_id)
            .fetch_all(pool)
            .await
    }

    /// Load versions for a set of scripts, grouped by script ID.
    pub async fn list_by_scripts(
        pool: &PgPool,
        script_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<ScriptVersion>>, sqlx::Error> {
        if script_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM script_versions
             WHERE script_id = ANY($1)
             ORDER BY script_id, version DESC"
        );
        let rows = sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(script_ids)
            .fetch_all(pool)
            .await?;

        let mut grouped: HashMap<DbId, Vec<ScriptVersion>> = HashMap::new();
        for version in rows {
            grouped.entry(version.script_id).or_default().push(version);
        }
        Ok(grouped)
    }

    /// Append a new version to a script and bump the script's `updated_at`.
    ///
    /// The script row is locked for the duration of the transaction, so
    /// concurrent callers are serialised and each gets a distinct number.
    /// Returns `None` if the script does not exist.
    pub async fn create_next(
        pool: &PgPool,
        script_id: DbId,
        content: &str,
    ) -> Result<Option<ScriptVersion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM scripts WHERE id = $1 FOR UPDATE")
                .bind(script_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let latest: Option<i32> =
            sqlx::query_scalar("SELECT MAX(version) FROM script_versions WHERE script_id = $1")
                .bind(script_id)
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "INSERT INTO script_versions (script_id, content, version)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let version = sqlx::query_as::<_, ScriptVersion>(&query)
            .bind(script_id)
            .bind(content)
            .bind(next_version(latest))
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE scripts SET updated_at = NOW() WHERE id = $1")
            .bind(script_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(script_id, version = version.version, "Created script version");
        Ok(Some(version))
    }
}
