use async_trait::async_trait;
use models::{Booking, BookingInput, BookingUpdate};

use crate::errors::ServiceError;

/// Trait abstraction for booking persistence.
///
/// `None` / `false` mean "no such id"; `Err` is reserved for storage failures.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn read_all(&self) -> Result<Vec<Booking>, ServiceError>;
    async fn read_by_id(&self, id: u64) -> Result<Option<Booking>, ServiceError>;
    async fn create(&self, input: BookingInput) -> Result<Booking, ServiceError>;
    async fn update(&self, id: u64, update: BookingUpdate) -> Result<Option<Booking>, ServiceError>;
    async fn delete(&self, id: u64) -> Result<bool, ServiceError>;
}
