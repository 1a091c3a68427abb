use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use giftlist_core::{Present, PresentDraft, PresentStore, PresentUpdate, StoreError};

pub struct PgPresentStore {
    pool: PgPool,
}

impl PgPresentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Remove every present. Used by the seed tool, not exposed over HTTP.
    pub async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM presents")
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct PresentRow {
    id: Uuid,
    name: String,
    description: String,
    price: f64,
    images: Vec<String>,
    is_reserved: bool,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PresentRow> for Present {
    fn from(row: PresentRow) -> Self {
        Present {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            images: row.images,
            is_reserved: row.is_reserved,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(Box::new(err))
}

#[async_trait]
impl PresentStore for PgPresentStore {
    async fn list_presents(&self) -> Result<Vec<Present>, StoreError> {
        let rows = sqlx::query_as::<_, PresentRow>(
            "SELECT id, name, description, price, images, is_reserved, created_at, updated_at \
             FROM presents ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(Present::from).collect())
    }

    async fn get_present(&self, id: Uuid) -> Result<Option<Present>, StoreError> {
        let row = sqlx::query_as::<_, PresentRow>(
            "SELECT id, name, description, price, images, is_reserved, created_at, updated_at \
             FROM presents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        Ok(row.map(Present::from))
    }

    async fn create_present(&self, draft: PresentDraft) -> Result<Present, StoreError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, PresentRow>(
            "INSERT INTO presents (id, name, description, price, images, is_reserved, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, FALSE, $6, $6) \
             RETURNING id, name, description, price, images, is_reserved, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(draft.name)
        .bind(draft.description)
        .bind(draft.price)
        .bind(draft.images)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;

        Ok(row.into())
    }

    async fn update_present(
        &self,
        id: Uuid,
        update: PresentUpdate,
    ) -> Result<Present, StoreError> {
        // COALESCE keeps the current reservation flag when the caller
        // does not supply one; Some(_) is the administrative override.
        let row = sqlx::query_as::<_, PresentRow>(
            "UPDATE presents \
             SET name = $2, description = $3, price = $4, images = $5, \
                 is_reserved = COALESCE($6, is_reserved), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING id, name, description, price, images, is_reserved, created_at, updated_at",
        )
        .bind(id)
        .bind(update.name)
        .bind(update.description)
        .bind(update.price)
        .bind(update.images)
        .bind(update.is_reserved)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.map(Present::from).ok_or(StoreError::NotFound)
    }

    async fn delete_present(&self, id: Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM presents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn reserve_present(&self, id: Uuid) -> Result<Present, StoreError> {
        // Conditional single-row update: the WHERE clause is the whole
        // concurrency story. Of two racing requests only one matches
        // `is_reserved = FALSE`; the other falls through to the lookup
        // below and reports the loss.
        let row = sqlx::query_as::<_, PresentRow>(
            "UPDATE presents SET is_reserved = TRUE, updated_at = NOW() \
             WHERE id = $1 AND is_reserved = FALSE \
             RETURNING id, name, description, price, images, is_reserved, created_at, updated_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        if let Some(row) = row {
            return Ok(row.into());
        }

        // Zero rows matched: distinguish a missing present from a lost race.
        let existing = sqlx::query_scalar::<_, bool>("SELECT is_reserved FROM presents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;

        match existing {
            Some(_) => Err(StoreError::AlreadyReserved),
            None => Err(StoreError::NotFound),
        }
    }
}
