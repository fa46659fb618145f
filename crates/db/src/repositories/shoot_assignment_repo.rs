//! Repository for the `shoot_assignments` table.

use std::collections::HashMap;

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::shoot::{AssignmentWithUser, CreateShootAssignment, ShootAssignment};
use crate::repositories::UserRepo;

const COLUMNS: &str = "id, shoot_id, user_id, role, created_at, updated_at";

/// Provides operations for crew assignments on shoots.
pub struct ShootAssignmentRepo;

impl ShootAssignmentRepo {
    /// Assign a user to a shoot.
    ///
    /// Fails with a unique violation on `uq_shoot_assignments_shoot_user` if
    /// the user is already on the shoot.
    pub async fn create(
        pool: &PgPool,
        input: &CreateShootAssignment,
    ) -> Result<ShootAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO shoot_assignments (shoot_id, user_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ShootAssignment>(&query)
            .bind(input.shoot_id)
            .bind(input.user_id)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Load assignments for a set of shoots, grouped by shoot ID.
    pub async fn list_by_shoots(
        pool: &PgPool,
        shoot_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<AssignmentWithUser>>, sqlx::Error> {
        if shoot_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM shoot_assignments
             WHERE shoot_id = ANY($1)
             ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, ShootAssignment>(&query)
            .bind(shoot_ids)
            .fetch_all(pool)
            .await?;

        let user_ids: Vec<DbId> = rows.iter().map(|a| a.user_id).collect();
        let users = UserRepo::summaries_by_ids(pool, &user_ids).await?;

        let mut grouped: HashMap<DbId, Vec<AssignmentWithUser>> = HashMap::new();
        for assignment in rows {
            let user = users.get(&assignment.user_id).cloned();
            grouped
                .entry(assignment.shoot_id)
                .or_default()
                .push(AssignmentWithUser { assignment, user });
        }
        Ok(grouped)
    }

    /// Remove a user from a shoot. Returns `true` if an assignment was removed.
    pub async fn delete(pool: &PgPool, shoot_id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM shoot_assignments WHERE shoot_id = $1 AND user_id = $2")
                .bind(shoot_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
