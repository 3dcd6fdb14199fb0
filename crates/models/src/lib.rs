//! Domain types shared across the booking backend.

pub mod booking_channel;
pub mod booking_status;
pub mod details;
pub mod holder;
