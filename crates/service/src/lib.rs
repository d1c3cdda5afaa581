//! Service layer providing the booking CRUD operations.
//! - Separates persistence from the HTTP boundary.
//! - Reuses entity definitions and validation in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod storage;
pub mod file;
pub mod bookings;

pub use bookings::repository::BookingRepository;
pub use errors::ServiceError;
pub use file::booking_store::BookingStore;
