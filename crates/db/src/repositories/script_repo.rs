//! Repository for the `scripts` table.

use goat_core::script::FIRST_VERSION;
use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::script::{Script, ScriptVersion, ScriptWithVersions};
use crate::repositories::ScriptVersionRepo;

const COLUMNS: &str = "id, title, created_at, updated_at";

/// Provides CRUD operations for scripts.
pub struct ScriptRepo;

impl ScriptRepo {
    /// Create a script together with its first version in one transaction.
    pub async fn create_with_initial_version(
        pool: &PgPool,
        title: &str,
        initial_content: &str,
    ) -> Result<ScriptWithVersions, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO scripts (title) VALUES ($1) RETURNING {COLUMNS}");
        let script = sqlx::query_as::<_, Script>(&query)
            .bind(title)
            .fetch_one(&mut *tx)
            .await?;

        let version = sqlx::query_as::<_, ScriptVersion>(
            "INSERT INTO script_versions (script_id, content, version)
             VALUES ($1, $2, $3)
             RETURNING id, script_id, content, version, created_at, updated_at",
        )
        .bind(script.id)
        .bind(initial_content)
        .bind(FIRST_VERSION)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ScriptWithVersions {
            script,
            versions: vec![version],
        })
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts WHERE id = $1");
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a script with all of its versions, newest first.
    pub async fn find_with_versions(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ScriptWithVersions>, sqlx::Error> {
        let Some(script) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let versions = ScriptVersionRepo::list_by_script(pool, script.id).await?;
        Ok(Some(ScriptWithVersions { script, versions }))
    }

    /// List scripts by most recent activity, each with its versions.
    pub async fn list_with_versions(pool: &PgPool) -> Result<Vec<ScriptWithVersions>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scripts ORDER BY updated_at DESC, id DESC");
        let scripts = sqlx::query_as::<_, Script>(&query).fetch_all(pool).await?;

        let ids: Vec<DbId> = scripts.iter().map(|s| s.id).collect();
        let mut versions = ScriptVersionRepo::list_by_scripts(pool, &ids).await?;

        Ok(scripts
            .into_iter()
            .map(|script| ScriptWithVersions {
                versions: versions.remove(&script.id).unwrap_or_default(),
                script,
            })
            .collect())
    }

    /// Rename a script. Returns `None` if it does not exist.
    pub async fn update_title(
        pool: &PgPool,
        id: DbId,
        title: &str,
    ) -> Result<Option<Script>, sqlx::Error> {
        let query = format!("UPDATE scripts SET title = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Script>(&query)
            .bind(id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a script. Versions are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scripts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
