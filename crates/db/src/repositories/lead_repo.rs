//! Repository for the `leads` table.

use goat_core::types::DbId;
use sqlx::PgPool;

use crate::models::lead::{CreateLead, Lead, LeadWithAssignee, UpdateLead};
use crate::repositories::UserRepo;

const COLUMNS: &str = "id, name, email, phone, status, rejection_reason, assignee_id, \
    created_at, updated_at";

/// Provides CRUD and pipeline operations for leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Insert a new lead, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLead) -> Result<Lead, sqlx::Error> {
        let query = format!(
            "INSERT INTO leads (name, email, phone, status, rejection_reason, assignee_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.status)
            .bind(&input.rejection_reason)
            .bind(input.assignee_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads WHERE id = $1");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a lead with its assignee summary.
    pub async fn find_with_assignee(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LeadWithAssignee>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(lead) => Ok(Self::with_assignee(pool, vec![lead]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List all leads, newest first, each with its assignee.
    pub async fn list_with_assignee(pool: &PgPool) -> Result<Vec<LeadWithAssignee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM leads ORDER BY created_at DESC, id DESC");
        let leads = sqlx::query_as::<_, Lead>(&query).fetch_all(pool).await?;
        Self::with_assignee(pool, leads).await
    }

    /// The most recently created leads assigned to a user.
    pub async fn list_recent_for_assignee(
        pool: &PgPool,
        assignee_id: DbId,
        limit: i64,
    ) -> Result<Vec<Lead>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM leads
             WHERE assignee_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(assignee_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update in one statement. Only non-`None` fields are
    /// written.
    ///
    /// With `required_status` set, the row is only touched while its stored
    /// status matches; `None` is returned otherwise, as for a missing row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLead,
        required_status: Option<&str>,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                assignee_id = COALESCE($5, assignee_id),
                status = COALESCE($6, status),
                rejection_reason = CASE WHEN $7 THEN $8 ELSE rejection_reason END
             WHERE id = $1 AND ($9::TEXT IS NULL OR status = $9)
             RETURNING {COLUMNS}"
        );
        let (set_reason, reason) = match &input.rejection_reason {
            Some(reason) => (true, reason.as_deref()),
            None => (false, None),
        };
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.assignee_id)
            .bind(&input.status)
            .bind(set_reason)
            .bind(reason)
            .bind(required_status)
            .fetch_optional(pool)
            .await
    }

    /// Assign a lead to a user.
    pub async fn assign(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!("UPDATE leads SET assignee_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Move a lead to `status`, writing `rejection_reason` verbatim.
    ///
    /// A `None` reason clears any previous value.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
        rejection_reason: Option<&str>,
    ) -> Result<Option<Lead>, sqlx::Error> {
        let query = format!(
            "UPDATE leads SET status = $2, rejection_reason = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lead>(&query)
            .bind(id)
            .bind(status)
            .bind(rejection_reason)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn with_assignee(
        pool: &PgPool,
        leads: Vec<Lead>,
    ) -> Result<Vec<LeadWithAssignee>, sqlx::Error> {
        let ids: Vec<DbId> = leads.iter().filter_map(|l| l.assignee_id).collect();
        let users = UserRepo::summaries_by_ids(pool, &ids).await?;
        Ok(leads
            .into_iter()
            .map(|lead| LeadWithAssignee {
                assignee: lead.assignee_id.and_then(|id| users.get(&id).cloned()),
                lead,
            })
            .collect())
    }
}
