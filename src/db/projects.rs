use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Project, ProjectCreate, ProjectUpdate};

/// Newest first by project date, the order the public site displays.
pub async fn list_projects(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        ORDER BY date DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_project_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_project(pool: &SqlitePool, data: &ProjectCreate) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        INSERT INTO projects (id, name, date, location, description, image_url, rate)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.name)
    .bind(data.date)
    .bind(&data.location)
    .bind(&data.description)
    .bind(data.image_url.as_deref())
    .bind(data.rate)
    .fetch_one(pool)
    .await
}

pub async fn update_project(
    pool: &SqlitePool,
    id: Uuid,
    data: &ProjectUpdate,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        UPDATE projects
        SET
            name = COALESCE($1, name),
            date = COALESCE($2, date),
            location = COALESCE($3, location),
            description = COALESCE($4, description),
            image_url = CASE WHEN $5 THEN $6 ELSE image_url END,
            rate = CASE WHEN $7 THEN $8 ELSE rate END,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(data.name.as_deref())
    .bind(data.date)
    .bind(data.location.as_deref())
    .bind(data.description.as_deref())
    .bind(data.image_url.is_some())
    .bind(data.image_url.clone().flatten())
    .bind(data.rate.is_some())
    .bind(data.rate.flatten())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_project(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_projects(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await
}
