pub mod errors;
pub mod booking;
pub mod validation;

pub use booking::{Booking, BookingInput, BookingStatus, BookingUpdate};
pub use errors::ModelError;
pub use validation::{validate_input, validate_update};
