use crate::booking_channel::BookingChannel;
use crate::booking_status::BookingStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Studio metadata owned by the cinema service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioDetails {
    pub id: u32,
    pub name: String,
    pub total_seats: i32,
}

/// Seat metadata owned by the cinema service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatDetails {
    pub id: u32,
    pub seat_number: String,
}

/// A booking joined with the studio and seat metadata backing it.
///
/// `studio` is `None` and `seats` is empty when the cinema service could
/// not answer for this booking; the record itself is still returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingWithDetails {
    pub id: Uuid,
    pub booking_code: String,
    pub user_id: Option<i64>,
    pub user_name: String,
    pub user_email: String,
    pub qr_code: String,
    pub booking_type: BookingChannel,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub studio: Option<StudioDetails>,
    pub seats: Vec<SeatDetails>,
}
