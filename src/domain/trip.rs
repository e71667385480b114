use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::country::Country;
use crate::domain::types::TripId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

impl Trip {
    /// A trip accepts registrations only while it starts strictly after `now`.
    pub fn is_open_for_registration(&self, now: NaiveDateTime) -> bool {
        self.date_from > now
    }
}

/// Name of a client registered for a trip.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripParticipant {
    pub first_name: String,
    pub last_name: String,
}

/// Trip together with its countries and registered participants.
#[derive(Clone, Debug, PartialEq)]
pub struct TripDetails {
    pub trip: Trip,
    pub countries: Vec<Country>,
    pub participants: Vec<TripParticipant>,
}
