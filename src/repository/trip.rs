//! Repository implementation for trips and their listing projection.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::{
        country::Country,
        trip::{Trip, TripDetails, TripParticipant},
        types::TripId,
    },
    models::{country::Country as DbCountry, trip::Trip as DbTrip},
    repository::{
        DieselRepository, TripListQuery, TripReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TripReader for DieselRepository {
    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>> {
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let db_trip = trips::table
            .find(id.get())
            .select(DbTrip::as_select())
            .first::<DbTrip>(&mut conn)
            .optional()?;

        db_trip
            .map(Trip::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<TripDetails>)> {
        use crate::schema::{client_trip, clients, countries, country_trip, trips};

        let mut conn = self.conn()?;

        // Total number of trips regardless of the requested page.
        let total = trips::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = trips::table
            .order((trips::name.asc(), trips::id.asc()))
            .select(DbTrip::as_select())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let db_trips = items.load::<DbTrip>(&mut conn)?;
        if db_trips.is_empty() {
            return Ok((total, Vec::new()));
        }

        let trip_ids: Vec<i32> = db_trips.iter().map(|t| t.id).collect();

        let db_countries = country_trip::table
            .inner_join(countries::table)
            .filter(country_trip::trip_id.eq_any(trip_ids.clone()))
            .order((countries::name.asc(), countries::id.asc()))
            .select((country_trip::trip_id, DbCountry::as_select()))
            .load::<(i32, DbCountry)>(&mut conn)?;

        let db_participants = client_trip::table
            .inner_join(clients::table)
            .filter(client_trip::trip_id.eq_any(trip_ids))
            .order((client_trip::registered_at.asc(), clients::id.asc()))
            .select((client_trip::trip_id, clients::first_name, clients::last_name))
            .load::<(i32, String, String)>(&mut conn)?;

        let mut countries_by_trip: HashMap<i32, Vec<Country>> = HashMap::new();
        for (trip_id, db_country) in db_countries {
            let country = Country::try_from(db_country)?;
            countries_by_trip.entry(trip_id).or_default().push(country);
        }

        let mut participants_by_trip: HashMap<i32, Vec<TripParticipant>> = HashMap::new();
        for (trip_id, first_name, last_name) in db_participants {
            participants_by_trip
                .entry(trip_id)
                .or_default()
                .push(TripParticipant {
                    first_name,
                    last_name,
                });
        }

        let details = db_trips
            .into_iter()
            .map(|db_trip| -> RepositoryResult<TripDetails> {
                let countries = countries_by_trip.remove(&db_trip.id).unwrap_or_default();
                let participants = participants_by_trip
                    .remove(&db_trip.id)
                    .unwrap_or_default();
                Ok(TripDetails {
                    trip: Trip::try_from(db_trip)?,
                    countries,
                    participants,
                })
            })
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok((total, details))
    }
}
