//! Repository for the `shoots` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::shoot::{CreateShoot, Shoot, ShootWithRelations, UpdateShoot};
use crate::repositories::{ClientRepo, ShootAssignmentRepo};

const COLUMNS: &str = "id, title, description, start_time, end_time, location, status, \
    client_id, created_at, updated_at";

/// Provides CRUD operations for shoots.
pub struct ShootRepo;

impl ShootRepo {
    /// Insert a new shoot, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShoot) -> Result<Shoot, sqlx::Error> {
        let query = format!(
            "INSERT INTO shoots
                (title, description, start_time, end_time, location, status, client_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.client_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoots WHERE id = $1");
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a shoot with its client and assignments.
    pub async fn find_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShootWithRelations>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(shoot) => Ok(Self::with_relations(pool, vec![shoot]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List all shoots by start time, each with client and assignments.
    pub async fn list_with_relations(
        pool: &PgPool,
    ) -> Result<Vec<ShootWithRelations>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoots ORDER BY start_time ASC, id ASC");
        let shoots = sqlx::query_as::<_, Shoot>(&query).fetch_all(pool).await?;
        Self::with_relations(pool, shoots).await
    }

    /// Update a shoot. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShoot,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!(
            "UPDATE shoots SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                location = COALESCE($6, location),
                status = COALESCE($7, status),
                client_id = COALESCE($8, client_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.status)
            .bind(input.client_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a shoot's status. Returns `None` if the shoot does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!("UPDATE shoots SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shoot. Assignments are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shoots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn with_relations(
        pool: &PgPool,
        shoots: Vec<Shoot>,
    ) -> Result<Vec<ShootWithRelations>, sqlx::Error> {
        let client_ids: Vec<DbId> = shoots.iter().filter_map(|s| s.client_id).collect();
        let shoot_ids: Vec<DbId> = shoots.iter().map(|s| s.id).collect();

        let clients = ClientRepo::find_by_ids(pool, &client_ids).await?;
        let mut assignments = ShootAssignmentRepo::list_by_shoots(pool, &shoot_ids).await?;

        Ok(shoots
            .into_iter()
            .map(|shoot| ShootWithRelations {
                client: shoot.client_id.and_then(|id| clients.get(&id).cloned()),
                assignments: assignments.remove(&shoot.id).unwrap_or_default(),
                shoot,
            })
            .collect())
    }
}
