use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Testimonial, TestimonialCreate, TestimonialUpdate};

pub async fn list_testimonials(pool: &SqlitePool) -> Result<Vec<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT *
        FROM testimonials
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_testimonial_by_id(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        SELECT *
        FROM testimonials
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_testimonial(
    pool: &SqlitePool,
    data: &TestimonialCreate,
) -> Result<Testimonial, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        INSERT INTO testimonials (id, rate, description, role, location)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(data.rate.unwrap_or(5))
    .bind(&data.description)
    .bind(&data.role)
    .bind(&data.location)
    .fetch_one(pool)
    .await
}

pub async fn update_testimonial(
    pool: &SqlitePool,
    id: Uuid,
    data: &TestimonialUpdate,
) -> Result<Option<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        r#"
        UPDATE testimonials
        SET
            rate = COALESCE($1, rate),
            description = COALESCE($2, description),
            role = COALESCE($3, role),
            location = COALESCE($4, location),
            updated_at = CURRENT_TIMESTAMP
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(data.rate)
    .bind(data.description.as_deref())
    .bind(data.role.as_deref())
    .bind(data.location.as_deref())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_testimonial(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM testimonials
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn count_testimonials(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials")
        .fetch_one(pool)
        .await
}
