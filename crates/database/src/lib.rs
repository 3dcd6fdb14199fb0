//! sea-orm persistence for booking records.

pub mod db;
pub mod entities;
pub mod services;
