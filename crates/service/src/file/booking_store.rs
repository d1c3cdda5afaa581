use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::{Booking, BookingInput, BookingUpdate};
use tracing::{debug, info};

use crate::bookings::repository::BookingRepository;
use crate::errors::ServiceError;
use crate::storage::json_list_store::{Change, JsonListStore};

/// File storage: bookings persisted as a JSON array.
///
/// Ids are `max(existing) + 1` computed at create time, so deleting the
/// highest id frees it for the next create.
pub struct BookingStore {
    store: JsonListStore<Booking>,
}

/// `None` once the largest stored id is `u64::MAX`.
fn next_id(bookings: &[Booking]) -> Option<u64> {
    bookings.iter().map(|b| b.id).max().unwrap_or(0).checked_add(1)
}

impl BookingStore {
    /// Initialize storage, creating the directory and an empty list if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let store = JsonListStore::<Booking>::new(path).await?;
        info!(path = %store.path().display(), "booking store ready");
        Ok(Arc::new(Self { store }))
    }

    /// All bookings in persisted order.
    pub async fn read_all(&self) -> Result<Vec<Booking>, ServiceError> {
        self.store.list().await
    }

    pub async fn read_by_id(&self, id: u64) -> Result<Option<Booking>, ServiceError> {
        Ok(self.store.list().await?.into_iter().find(|b| b.id == id))
    }

    pub async fn create(&self, input: BookingInput) -> Result<Booking, ServiceError> {
        let created = self
            .store
            .update_list(|bookings| match next_id(bookings) {
                Some(id) => {
                    let booking = input.into_booking(id);
                    bookings.push(booking.clone());
                    Change::Persist(Ok(booking))
                }
                None => Change::Discard(Err(ServiceError::Storage("id space exhausted".into()))),
            })
            .await??;
        info!(event = "booking_created", id = created.id, status = %created.status, "booking created");
        Ok(created)
    }

    /// Merge `update` into the booking with `id`; `None` when it does not exist.
    pub async fn update(&self, id: u64, update: BookingUpdate) -> Result<Option<Booking>, ServiceError> {
        let updated = self
            .store
            .update_list(|bookings| match bookings.iter_mut().find(|b| b.id == id) {
                Some(existing) => {
                    existing.apply(update);
                    existing.id = id;
                    Change::Persist(Some(existing.clone()))
                }
                None => Change::Discard(None),
            })
            .await?;
        match &updated {
            Some(b) => info!(event = "booking_updated", id, status = %b.status, "booking updated"),
            None => debug!(event = "booking_update_missing", id, "booking not found"),
        }
        Ok(updated)
    }

    /// Remove the booking with `id`; `false` (and no write) when it does not exist.
    pub async fn delete(&self, id: u64) -> Result<bool, ServiceError> {
        let removed = self
            .store
            .update_list(|bookings| {
                let before = bookings.len();
                bookings.retain(|b| b.id != id);
                if bookings.len() < before {
                    Change::Persist(true)
                } else {
                    Change::Discard(false)
                }
            })
            .await?;
        if removed {
            info!(event = "booking_deleted", id, "booking deleted");
        } else {
            debug!(event = "booking_delete_missing", id, "booking not found");
        }
        Ok(removed)
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn read_all(&self) -> Result<Vec<Booking>, ServiceError> { self.read_all().await }
    async fn read_by_id(&self, id: u64) -> Result<Option<Booking>, ServiceError> { self.read_by_id(id).await }
    async fn create(&self, input: BookingInput) -> Result<Booking, ServiceError> { self.create(input).await }
    async fn update(&self, id: u64, update: BookingUpdate) -> Result<Option<Booking>, ServiceError> { self.update(id, update).await }
    async fn delete(&self, id: u64) -> Result<bool, ServiceError> { self.delete(id).await }
}
