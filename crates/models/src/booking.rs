use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a booking.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A moto-taxi booking as persisted and returned over the API.
/// - `id` is assigned by the store and never changes
/// - `fare` is an integer amount in RWF
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Booking {
    pub id: u64,
    pub customer_name: String,
    pub pickup: String,
    pub destination: String,
    pub fare: i64,
    pub status: BookingStatus,
}

/// Create payload: every field required, no id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct BookingInput {
    pub customer_name: String,
    pub pickup: String,
    pub destination: String,
    pub fare: i64,
    pub status: BookingStatus,
}

/// Partial update payload; absent (or `null`) fields keep their stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct BookingUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookingStatus>,
}

impl BookingInput {
    pub fn into_booking(self, id: u64) -> Booking {
        Booking {
            id,
            customer_name: self.customer_name,
            pickup: self.pickup,
            destination: self.destination,
            fare: self.fare,
            status: self.status,
        }
    }
}

impl Booking {
    /// Merge the supplied fields of `update` into this record. `id` is untouched.
    pub fn apply(&mut self, update: BookingUpdate) {
        if let Some(v) = update.customer_name { self.customer_name = v; }
        if let Some(v) = update.pickup { self.pickup = v; }
        if let Some(v) = update.destination { self.destination = v; }
        if let Some(v) = update.fare { self.fare = v; }
        if let Some(v) = update.status { self.status = v; }
    }
}
