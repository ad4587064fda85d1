//! PostgreSQL implementation of the redirect repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// Row shape of the `redirects` table.
#[derive(sqlx::FromRow)]
struct RedirectRow {
    id: String,
    url: String,
    clicks: i64,
    enabled: bool,
}

impl From<RedirectRow> for Redirect {
    fn from(row: RedirectRow) -> Self {
        Redirect::new(row.id, row.url, row.clicks, row.enabled)
    }
}

/// PostgreSQL repository for redirect storage.
///
/// Uniqueness comes from the `redirects.id` primary key; click counting is a
/// single `UPDATE ... SET clicks = clicks + 1`, so concurrent visits never
/// lose updates.
pub struct PgRedirectRepository {
    pool: Arc<PgPool>,
}

impl PgRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for PgRedirectRepository {
    async fn create(&self, new_redirect: NewRedirect) -> Result<Redirect, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            INSERT INTO redirects (id, url, clicks, enabled)
            VALUES ($1, $2, 0, $3)
            RETURNING id, url, clicks, enabled
            "#,
        )
        .bind(&new_redirect.id)
        .bind(&new_redirect.url)
        .bind(new_redirect.enabled)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Redirect>, AppError> {
        let row = sqlx::query_as::<_, RedirectRow>(
            r#"
            SELECT id, url, clicks, enabled
            FROM redirects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Redirect::from))
    }

    async fn increment_clicks(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE redirects SET clicks = clicks + 1 WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
