use async_trait::async_trait;
use uuid::Uuid;

use crate::present::{Present, PresentDraft, PresentUpdate};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Present not found")]
    NotFound,

    #[error("Present is already reserved")]
    AlreadyReserved,

    #[error("Storage backend failure")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Repository trait for present catalog access.
///
/// The store is the single owner of present rows; all operations are
/// single-item and there are no cross-item transactions.
#[async_trait]
pub trait PresentStore: Send + Sync {
    /// All presents, newest first.
    async fn list_presents(&self) -> Result<Vec<Present>, StoreError>;

    async fn get_present(&self, id: Uuid) -> Result<Option<Present>, StoreError>;

    async fn create_present(&self, draft: PresentDraft) -> Result<Present, StoreError>;

    /// Full overwrite of the mutable fields. `updated_at` is refreshed.
    async fn update_present(
        &self,
        id: Uuid,
        update: PresentUpdate,
    ) -> Result<Present, StoreError>;

    async fn delete_present(&self, id: Uuid) -> Result<(), StoreError>;

    /// Atomically flip `is_reserved` from `false` to `true`.
    ///
    /// The check and the write must not be separable: of two concurrent
    /// calls against the same unreserved present, exactly one returns
    /// the updated row and the other gets [`StoreError::AlreadyReserved`].
    async fn reserve_present(&self, id: Uuid) -> Result<Present, StoreError>;
}
