//! Database models shared across the trip registry repository.

pub mod client;
pub mod client_trip;
pub mod config;
pub mod country;
pub mod trip;
