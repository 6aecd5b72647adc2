//! Bioskop PostgreSQL repository

use async_trait::async_trait;
use shared::models::{Bioskop, BioskopInput};
use sqlx::PgPool;

use super::{BioskopRepository, RepoResult};

/// [`BioskopRepository`] over a shared sqlx pool
#[derive(Clone)]
pub struct PgBioskopRepository {
    pool: PgPool,
}

impl PgBioskopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BioskopRepository for PgBioskopRepository {
    async fn find_all(&self) -> RepoResult<Vec<Bioskop>> {
        let rows = sqlx::query_as::<_, Bioskop>(
            "SELECT id, nama, lokasi, rating FROM bioskop ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Bioskop>> {
        let row = sqlx::query_as::<_, Bioskop>(
            "SELECT id, nama, lokasi, rating FROM bioskop WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, data: &BioskopInput) -> RepoResult<Bioskop> {
        let row = sqlx::query_as::<_, Bioskop>(
            r#"
            INSERT INTO bioskop (nama, lokasi, rating)
            VALUES ($1, $2, $3)
            RETURNING id, nama, lokasi, rating
            "#,
        )
        .bind(&data.nama)
        .bind(&data.lokasi)
        .bind(data.rating)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    // RETURNING reports matched rows, so an update that changes nothing
    // still counts as found.
    async fn update(&self, id: i64, data: &BioskopInput) -> RepoResult<bool> {
        let updated = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE bioskop
            SET nama = $1, lokasi = $2, rating = $3
            WHERE id = $4
            RETURNING id
            "#,
        )
        .bind(&data.nama)
        .bind(&data.lokasi)
        .bind(data.rating)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated.is_some())
    }

    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM bioskop WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }
}
