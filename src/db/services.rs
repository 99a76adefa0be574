use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Service, ServiceCreate, ServiceIcon, ServiceUpdate};

pub async fn list_services(pool: &SqlitePool) -> Result<Vec<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        SELECT *
        FROM services
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_service_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        SELECT *
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_service(pool: &SqlitePool, data: &ServiceCreate) -> Result<Service, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        INSERT INTO services (id, title, description, icon)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.icon.as_str())
    .fetch_one(pool)
    .await
}

pub async fn update_service(
    pool: &SqlitePool,
    id: Uuid,
    data: &ServiceUpdate,
) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        r#"
        UPDATE services
        SET
            title = COALESCE($1, title),
            description = COALESCE($2, description),
            icon = COALESCE($3, icon),
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.description.as_deref())
    .bind(data.icon.as_ref().map(ServiceIcon::as_str))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_service(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_services(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await
}
