//! Shapes of the trip listing endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::country::Country;
use crate::domain::trip::{TripDetails, TripParticipant};

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query parameters accepted by `GET /api/trips`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripsQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// Pagination envelope returned by [`crate::services::trips::list_trips`].
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripsPage {
    pub page_number: i64,
    pub page_size: i64,
    /// Number of trips in the store, independent of the page.
    pub total_records: usize,
    pub trips: Vec<TripDto>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<CountryDto>,
    pub clients: Vec<ClientNameDto>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub name: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientNameDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<Country> for CountryDto {
    fn from(country: Country) -> Self {
        Self { name: country.name }
    }
}

impl From<TripParticipant> for ClientNameDto {
    fn from(participant: TripParticipant) -> Self {
        Self {
            first_name: participant.first_name,
            last_name: participant.last_name,
        }
    }
}

impl From<TripDetails> for TripDto {
    fn from(details: TripDetails) -> Self {
        let TripDetails {
            trip,
            countries,
            participants,
        } = details;

        Self {
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
            countries: countries.into_iter().map(CountryDto::from).collect(),
            clients: participants.into_iter().map(ClientNameDto::from).collect(),
        }
    }
}
