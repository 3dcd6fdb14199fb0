use chrono::NaiveDateTime;
use database::entities::booking;
use models::details::{BookingWithDetails, SeatDetails, StudioDetails};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Booking request for a registered user
#[derive(Debug, Deserialize, ToSchema)]
pub struct OnlineBookingRequest {
    pub studio_id: u32,
    pub seat_ids: Vec<u32>,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
}

/// Walk-in booking entered by staff
#[derive(Debug, Deserialize, ToSchema)]
pub struct OfflineBookingRequest {
    pub studio_id: u32,
    pub seat_ids: Vec<u32>,
    pub customer_name: String,
    pub customer_email: String,
}

/// A scanned QR code presented for redemption
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateRequest {
    pub booking_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: Uuid,
    pub booking_code: String,
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_email: String,
    pub studio_id: i64,
    pub seat_ids: Vec<i64>,
    pub qr_code: String,
    pub booking_type: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<booking::Model> for BookingResponse {
    fn from(model: booking::Model) -> Self {
        Self {
            id: model.id,
            booking_code: model.booking_code,
            user_id: model.user_id,
            user_name: model.user_name,
            user_email: model.user_email,
            studio_id: model.studio_id,
            seat_ids: model.seat_ids,
            qr_code: model.qr_code,
            booking_type: model.booking_type.to_string(),
            status: model.status.to_string(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudioResponse {
    pub id: u32,
    pub name: String,
    pub total_seats: i32,
}

impl From<StudioDetails> for StudioResponse {
    fn from(studio: StudioDetails) -> Self {
        Self {
            id: studio.id,
            name: studio.name,
            total_seats: studio.total_seats,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeatResponse {
    pub id: u32,
    pub seat_number: String,
}

impl From<SeatDetails> for SeatResponse {
    fn from(seat: SeatDetails) -> Self {
        Self {
            id: seat.id,
            seat_number: seat.seat_number,
        }
    }
}

/// A booking with whatever studio and seat metadata the cinema service
/// could provide; `studio` is null and `seats` empty when it could not
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingDetailsResponse {
    pub id: Uuid,
    pub booking_code: String,
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_email: String,
    pub qr_code: String,
    pub booking_type: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub studio: Option<StudioResponse>,
    pub seats: Vec<SeatResponse>,
}

impl From<BookingWithDetails> for BookingDetailsResponse {
    fn from(details: BookingWithDetails) -> Self {
        Self {
            id: details.id,
            booking_code: details.booking_code,
            user_id: details.user_id,
            user_name: details.user_name,
            user_email: details.user_email,
            qr_code: details.qr_code,
            booking_type: details.booking_type.to_string(),
            status: details.status.to_string(),
            created_at: details.created_at,
            updated_at: details.updated_at,
            studio: details.studio.map(StudioResponse::from),
            seats: details.seats.into_iter().map(SeatResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
