//! HTTP client for the remote cinema service: seat holds and releases on
//! the write side, studio and seat metadata on the read side.

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::{SeatInventory, StudioDirectory};
pub use client::CinemaClient;
pub use config::CinemaConfig;
