use models::{Booking, BookingInput, BookingStatus, BookingUpdate};
use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::errors::ErrorBody;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Moto Booking API",
        version = "1.0",
        description = "A RESTful API for managing moto taxi bookings in Kigali"
    ),
    paths(
        crate::routes::health,
        crate::routes::bookings::list_bookings,
        crate::routes::bookings::create_booking,
        crate::routes::bookings::get_booking,
        crate::routes::bookings::update_booking,
        crate::routes::bookings::delete_booking,
    ),
    components(
        schemas(
            HealthResponse,
            Booking,
            BookingStatus,
            BookingInput,
            BookingUpdate,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "bookings", description = "Moto booking operations")
    )
)]
pub struct ApiDoc;
