use std::sync::Arc;

use service::BookingRepository;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }
}
