//! Booking core: the creation saga against the remote seat inventory,
//! the single-use redemption state machine, and the enriched read side.

pub mod error;
pub mod service;
pub mod token;

pub use error::BookingError;
pub use service::BookingService;
