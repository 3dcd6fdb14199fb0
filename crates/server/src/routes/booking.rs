use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use booking::error::BookingError;

use crate::dtos::booking::{
    BookingDetailsResponse, BookingResponse, ErrorResponse, OfflineBookingRequest,
    OnlineBookingRequest, ValidateRequest,
};
use crate::state::AppState;

fn error_response(err: &BookingError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        BookingError::EmptySeatSelection => StatusCode::UNPROCESSABLE_ENTITY,
        BookingError::ReservationFailed | BookingError::ConcurrentRedemption => {
            StatusCode::CONFLICT
        }
        BookingError::InvalidOrRedeemedToken => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Create a booking for a registered user
#[utoipa::path(
    post,
    path = "/api/bookings/online",
    request_body = OnlineBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 409, description = "Seats could not be reserved", body = ErrorResponse),
        (status = 422, description = "No seats selected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn create_online_booking(
    State(state): State<AppState>,
    Json(req): Json<OnlineBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), (StatusCode, Json<ErrorResponse>)> {
    let created = state
        .bookings
        .create_online_booking(
            &state.db,
            req.studio_id,
            req.seat_ids,
            req.user_id,
            req.user_name,
            req.user_email,
        )
        .await
        .map_err(|e| error_response(&e))?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Create a booking for a walk-in customer
#[utoipa::path(
    post,
    path = "/api/bookings/offline",
    request_body = OfflineBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingResponse),
        (status = 409, description = "Seats could not be reserved", body = ErrorResponse),
        (status = 422, description = "No seats selected", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn create_offline_booking(
    State(state): State<AppState>,
    Json(req): Json<OfflineBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), (StatusCode, Json<ErrorResponse>)> {
    let created = state
        .bookings
        .create_offline_booking(
            &state.db,
            req.studio_id,
            req.seat_ids,
            req.customer_name,
            req.customer_email,
        )
        .await
        .map_err(|e| error_response(&e))?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Redeem a scanned QR code; each code works exactly once
#[utoipa::path(
    post,
    path = "/api/bookings/validate",
    request_body = ValidateRequest,
    responses(
        (status = 200, description = "Ticket redeemed", body = BookingResponse),
        (status = 400, description = "Invalid or used ticket", body = ErrorResponse),
        (status = 409, description = "Ticket redeemed concurrently", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn validate_qr_code(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, Json<ErrorResponse>)> {
    let redeemed = state
        .bookings
        .redeem(&state.db, &req.booking_code)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(redeemed.into()))
}

/// List a user's bookings, newest first, enriched with studio and seat
/// metadata where available
#[utoipa::path(
    get,
    path = "/api/bookings/user/{user_id}",
    params(
        ("user_id" = i64, Path, description = "Registered user id")
    ),
    responses(
        (status = 200, description = "Bookings for the user", body = [BookingDetailsResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<BookingDetailsResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let bookings = state
        .bookings
        .list_bookings_for_user(&state.db, user_id)
        .await
        .map_err(|e| error_response(&e))?;

    Ok(Json(
        bookings.into_iter().map(BookingDetailsResponse::from).collect(),
    ))
}
