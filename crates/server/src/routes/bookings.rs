use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use models::{validate_input, validate_update, Booking, BookingInput, BookingUpdate};
use serde_json::Value;
use tracing::debug;

use crate::errors::{ErrorBody, JsonApiError};
use crate::metrics;
use crate::state::AppState;

/// Non-integer ids never match a booking.
fn booking_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, JsonApiError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!(error = %rejection, "unparsable booking id");
            Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(rejection.body_text())))
        }
    }
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, JsonApiError> {
    body.map(|Json(v)| v).map_err(|rejection| JsonApiError::bad_request(rejection.body_text()))
}

fn observe<T>(op: &str, res: &Result<T, JsonApiError>) {
    let outcome = match res {
        Ok(_) => "ok",
        Err(e) if e.status == StatusCode::NOT_FOUND => "not_found",
        Err(e) if e.status.is_client_error() => "invalid",
        Err(_) => "error",
    };
    metrics::record(op, outcome);
}

/// Get all bookings
#[utoipa::path(
    get, path = "/api/v1/bookings/", tag = "bookings",
    responses(
        (status = 200, description = "All bookings", body = [Booking]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, JsonApiError> {
    let res = state.bookings.read_all().await.map_err(JsonApiError::from);
    observe("list", &res);
    let list = res?;
    debug!(count = list.len(), "list bookings");
    Ok(Json(list))
}

/// Create a new booking
#[utoipa::path(
    post, path = "/api/v1/bookings/", tag = "bookings",
    request_body = BookingInput,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Booking>), JsonApiError> {
    let res = async move {
        let input = validate_input(&json_body(body)?)?;
        Ok::<_, JsonApiError>(state.bookings.create(input).await?)
    }
    .await;
    observe("create", &res);
    let created = res?;
    debug!(id = created.id, customer = %created.customer_name, "created booking");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a booking by ID
#[utoipa::path(
    get, path = "/api/v1/bookings/{id}", tag = "bookings",
    params(("id" = u64, Path, description = "The booking identifier")),
    responses(
        (status = 200, description = "Booking found", body = Booking),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Booking>, JsonApiError> {
    let res = async move {
        let id = booking_id(path)?;
        state.bookings.read_by_id(id).await?.ok_or_else(|| JsonApiError::booking_not_found(id))
    }
    .await;
    observe("get", &res);
    res.map(Json)
}

/// Update a booking
#[utoipa::path(
    put, path = "/api/v1/bookings/{id}", tag = "bookings",
    params(("id" = u64, Path, description = "The booking identifier")),
    request_body = BookingUpdate,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, description = "Validation Error", body = ErrorBody),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn update_booking(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Booking>, JsonApiError> {
    let res = async move {
        let id = booking_id(path)?;
        let update = validate_update(&json_body(body)?)?;
        state.bookings.update(id, update).await?.ok_or_else(|| JsonApiError::booking_not_found(id))
    }
    .await;
    observe("update", &res);
    let updated = res?;
    debug!(id = updated.id, status = %updated.status, "updated booking");
    Ok(Json(updated))
}

/// Delete a booking
#[utoipa::path(
    delete, path = "/api/v1/bookings/{id}", tag = "bookings",
    params(("id" = u64, Path, description = "The booking identifier")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found", body = ErrorBody)
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let res = async move {
        let id = booking_id(path)?;
        if state.bookings.delete(id).await? {
            debug!(id, "deleted booking");
            Ok(StatusCode::NO_CONTENT)
        } else {
            Err(JsonApiError::booking_not_found(id))
        }
    }
    .await;
    observe("delete", &res);
    res
}
