use async_trait::async_trait;
use models::details::{SeatDetails, StudioDetails};

use crate::error::{MetadataError, ReservationError};

/// Write-side seat operations owned by the remote cinema service.
///
/// The remote service is the sole arbiter of seat conflicts; nothing on
/// this side locks seats locally.
#[async_trait]
pub trait SeatInventory {
    /// Places a hold on the given seats as one atomic group
    async fn reserve_seats(&self, seat_ids: &[u32]) -> Result<(), ReservationError>;

    /// Releases previously held seats.
    ///
    /// Best effort: implementations log failures and surface nothing, so
    /// a failed release can never mask the error that triggered it.
    async fn release_seats(&self, seat_ids: &[u32]);
}

/// Read-only studio and seat metadata lookups
#[async_trait]
pub trait StudioDirectory {
    async fn studio_details(&self, studio_id: u32) -> Result<StudioDetails, MetadataError>;

    /// Seat descriptions in the same order as the requested ids
    async fn seat_details(&self, seat_ids: &[u32]) -> Result<Vec<SeatDetails>, MetadataError>;
}
