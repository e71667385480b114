use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, TripId};

/// Registration of a client for a trip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientTrip {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClientTrip {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}

impl NewClientTrip {
    #[must_use]
    pub fn new(
        client_id: ClientId,
        trip_id: TripId,
        registered_at: NaiveDateTime,
        payment_date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            client_id,
            trip_id,
            registered_at,
            payment_date,
        }
    }
}
