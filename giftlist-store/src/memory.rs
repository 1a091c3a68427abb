//! In-memory implementation of the present store.
//!
//! Backs tests and database-less development. Not durable: all state is
//! lost on restart. Mutations take the write lock, so the reservation
//! check-and-set is serialized exactly like the SQL conditional update.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use giftlist_core::{Present, PresentDraft, PresentStore, PresentUpdate, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    // Insertion order is creation order; list() walks it backwards.
    presents: Arc<RwLock<Vec<Present>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PresentStore for MemoryStore {
    async fn list_presents(&self) -> Result<Vec<Present>, StoreError> {
        let presents = self.presents.read().await;
        Ok(presents.iter().rev().cloned().collect())
    }

    async fn get_present(&self, id: Uuid) -> Result<Option<Present>, StoreError> {
        let presents = self.presents.read().await;
        Ok(presents.iter().find(|p| p.id == id).cloned())
    }

    async fn create_present(&self, draft: PresentDraft) -> Result<Present, StoreError> {
        let now = Utc::now();
        let present = Present {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            images: draft.images,
            is_reserved: false,
            created_at: now,
            updated_at: now,
        };

        self.presents.write().await.push(present.clone());
        Ok(present)
    }

    async fn update_present(
        &self,
        id: Uuid,
        update: PresentUpdate,
    ) -> Result<Present, StoreError> {
        let mut presents = self.presents.write().await;
        let present = presents
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        present.name = update.name;
        present.description = update.description;
        present.price = update.price;
        present.images = update.images;
        if let Some(is_reserved) = update.is_reserved {
            present.is_reserved = is_reserved;
        }
        present.updated_at = Utc::now();

        Ok(present.clone())
    }

    async fn delete_present(&self, id: Uuid) -> Result<(), StoreError> {
        let mut presents = self.presents.write().await;
        let before = presents.len();
        presents.retain(|p| p.id != id);
        if presents.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn reserve_present(&self, id: Uuid) -> Result<Present, StoreError> {
        // Check and flip under one write lock; concurrent callers queue here.
        let mut presents = self.presents.write().await;
        let present = presents
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if present.is_reserved {
            return Err(StoreError::AlreadyReserved);
        }

        present.is_reserved = true;
        present.updated_at = Utc::now();
        Ok(present.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> PresentDraft {
        PresentDraft {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            images: vec![],
        }
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = MemoryStore::new();
        store.create_present(draft("First", 10.0)).await.unwrap();
        store.create_present(draft("Second", 20.0)).await.unwrap();

        let listed = store.list_presents().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Second");
        assert_eq!(listed[1].name, "First");
    }

    #[tokio::test]
    async fn create_starts_unreserved() {
        let store = MemoryStore::new();
        let created = store.create_present(draft("Lamp", 20.0)).await.unwrap();
        assert!(!created.is_reserved);

        let fetched = store.get_present(created.id).await.unwrap().unwrap();
        assert!(!fetched.is_reserved);
    }

    #[tokio::test]
    async fn reserve_flips_flag_exactly_once() {
        let store = MemoryStore::new();
        let created = store.create_present(draft("Lamp", 20.0)).await.unwrap();

        let reserved = store.reserve_present(created.id).await.unwrap();
        assert!(reserved.is_reserved);

        let second = store.reserve_present(created.id).await;
        assert!(matches!(second, Err(StoreError::AlreadyReserved)));
    }

    #[tokio::test]
    async fn reserve_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let result = store.reserve_present(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_reserves_produce_one_winner() {
        let store = Arc::new(MemoryStore::new());
        let created = store.create_present(draft("Lamp", 20.0)).await.unwrap();
        let id = created.id;

        let a = tokio::spawn({
            let store = store.clone();
            async move { store.reserve_present(id).await }
        });
        let b = tokio::spawn({
            let store = store.clone();
            async move { store.reserve_present(id).await }
        });

        let results = [a.await.unwrap(), b.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let losers = results
            .iter()
            .filter(|r| matches!(r, Err(StoreError::AlreadyReserved)))
            .count();

        assert_eq!(winners, 1);
        assert_eq!(losers, 1);
    }

    #[tokio::test]
    async fn update_overwrites_and_can_reset_reservation() {
        let store = MemoryStore::new();
        let created = store.create_present(draft("Lamp", 20.0)).await.unwrap();
        store.reserve_present(created.id).await.unwrap();

        // Overwrite without touching the flag.
        let updated = store
            .update_present(
                created.id,
                PresentUpdate {
                    name: "Desk Lamp".to_string(),
                    description: "Brighter".to_string(),
                    price: 25.0,
                    images: vec!["/uploads/lamp.webp".to_string()],
                    is_reserved: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Desk Lamp");
        assert!(updated.is_reserved);

        // Administrative override resets it.
        let reset = store
            .update_present(
                created.id,
                PresentUpdate {
                    name: "Desk Lamp".to_string(),
                    description: "Brighter".to_string(),
                    price: 25.0,
                    images: vec![],
                    is_reserved: Some(false),
                },
            )
            .await
            .unwrap();
        assert!(!reset.is_reserved);

        // And the guard path works again afterwards.
        assert!(store.reserve_present(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let result = store.delete_present(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::NotFound)));

        let created = store.create_present(draft("Lamp", 20.0)).await.unwrap();
        store.delete_present(created.id).await.unwrap();
        assert!(store.get_present(created.id).await.unwrap().is_none());
    }
}
