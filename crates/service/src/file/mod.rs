pub mod booking_store;
