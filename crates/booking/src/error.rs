use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Everything the booking core can fail with.
///
/// Creation failures after a successful seat reservation have already
/// triggered a best-effort release by the time the caller sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// No seats were selected; nothing was attempted remotely
    EmptySeatSelection,
    /// The remote inventory rejected the hold or was unreachable
    ReservationFailed,
    /// The QR payload could not be produced
    TokenGenerationFailed,
    /// The local booking row could not be written
    PersistenceFailed,
    /// The local transaction did not commit; the write is not durable
    CommitFailed,
    /// Unknown code, or a code that was already redeemed. The two cases
    /// are deliberately indistinguishable to the caller.
    InvalidOrRedeemedToken,
    /// Lost the race against another redemption of the same code
    ConcurrentRedemption,
    /// The read-side store query failed
    StoreQueryFailed,
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::EmptySeatSelection => write!(f, "no seats selected"),
            Self::ReservationFailed => write!(f, "failed to reserve seats"),
            Self::TokenGenerationFailed => write!(f, "failed to generate QR code"),
            Self::PersistenceFailed => write!(f, "failed to create booking"),
            Self::CommitFailed => write!(f, "failed to commit transaction"),
            Self::InvalidOrRedeemedToken => write!(f, "invalid or used ticket"),
            Self::ConcurrentRedemption => write!(f, "ticket was redeemed concurrently"),
            Self::StoreQueryFailed => write!(f, "failed to load bookings"),
        }
    }
}

impl Error for BookingError {}
