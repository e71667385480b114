//! Domain aggregates exposed by the trip registration service layer.

pub mod client;
pub mod client_trip;
pub mod country;
pub mod trip;
pub mod types;
