use std::sync::Arc;

use uuid::Uuid;

use crate::present::Present;
use crate::store::{PresentStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum ReserveError {
    #[error("Invalid reservation code")]
    InvalidCode,

    #[error("Present not found")]
    NotFound,

    #[error("Present is already reserved")]
    AlreadyReserved,

    #[error("Storage backend failure")]
    Store(#[source] StoreError),
}

/// Gate for the one-way `Available -> Reserved` transition.
///
/// One shared code covers the whole catalog. The code is a low-friction
/// convenience gate, not a credential: a plain equality check is the
/// whole of the comparison.
pub struct ReservationGuard {
    code: String,
    store: Arc<dyn PresentStore>,
}

impl ReservationGuard {
    pub fn new(code: String, store: Arc<dyn PresentStore>) -> Self {
        Self { code, store }
    }

    /// Reserve `id` if `supplied_code` matches the configured code.
    ///
    /// The store is not touched on a code mismatch. The existence check
    /// and the flag flip are delegated to the store's atomic
    /// `reserve_present`, so two concurrent winners are impossible.
    pub async fn reserve(&self, id: Uuid, supplied_code: &str) -> Result<Present, ReserveError> {
        if supplied_code != self.code {
            tracing::debug!(present_id = %id, "reservation rejected: code mismatch");
            return Err(ReserveError::InvalidCode);
        }

        match self.store.reserve_present(id).await {
            Ok(present) => {
                tracing::info!(present_id = %id, "present reserved");
                Ok(present)
            }
            Err(StoreError::NotFound) => Err(ReserveError::NotFound),
            Err(StoreError::AlreadyReserved) => Err(ReserveError::AlreadyReserved),
            Err(err) => Err(ReserveError::Store(err)),
        }
    }
}
