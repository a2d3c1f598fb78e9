//! Repository for the `projects` table.

use ecv_core::patch;
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, UpdateProject, DEFAULT_PRIORITY, DEFAULT_STATUS,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, title, description, status, priority, due_date, assignee, \
                       created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` defaults to `planning` and `priority` to `medium`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (artist_id, title, description, status, priority, due_date, assignee)
             VALUES ($1, $2, $3, COALESCE($4, $5), COALESCE($6, $7), $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(DEFAULT_STATUS)
            .bind(&input.priority)
            .bind(DEFAULT_PRIORITY)
            .bind(input.due_date)
            .bind(&input.assignee)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects ordered by most recently created first, optionally
    /// restricted to one artist.
    pub async fn list(pool: &PgPool, artist_id: Option<&str>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE $1::varchar IS NULL OR artist_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only supplied fields are applied; `updated_at` is
    /// always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let (description_set, description) = patch::split(&input.description);
        let (due_date_set, due_date) = patch::split(&input.due_date);
        let (assignee_set, assignee) = patch::split(&input.assignee);
        let query = format!(
            "UPDATE projects SET
                artist_id = COALESCE($2, artist_id),
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                status = COALESCE($6, status),
                priority = COALESCE($7, priority),
                due_date = CASE WHEN $8 THEN $9 ELSE due_date END,
                assignee = CASE WHEN $10 THEN $11 ELSE assignee END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.artist_id)
            .bind(&input.title)
            .bind(description_set)
            .bind(description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(due_date_set)
            .bind(due_date.copied())
            .bind(assignee_set)
            .bind(assignee)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Curated images keep their rows
    /// with `project_id` cleared.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
