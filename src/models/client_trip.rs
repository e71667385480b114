use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client_trip::{
    ClientTrip as DomainClientTrip, NewClientTrip as DomainNewClientTrip,
};
use crate::domain::types::{ClientId, TripId, TypeConstraintError};
use crate::models::client::Client;
use crate::models::trip::Trip;

#[derive(Debug, Clone, Queryable, Selectable, Associations, Identifiable)]
#[diesel(primary_key(client_id, trip_id))]
#[diesel(belongs_to(Client, foreign_key = client_id))]
#[diesel(belongs_to(Trip, foreign_key = trip_id))]
#[diesel(table_name = crate::schema::client_trip)]
/// Association table linking clients to the trips they registered for.
pub struct ClientTrip {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_trip)]
/// Insertable variant of [`ClientTrip`].
pub struct NewClientTrip {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}

impl TryFrom<ClientTrip> for DomainClientTrip {
    type Error = TypeConstraintError;

    fn try_from(record: ClientTrip) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: ClientId::try_from(record.client_id)?,
            trip_id: TripId::try_from(record.trip_id)?,
            registered_at: record.registered_at,
            payment_date: record.payment_date,
        })
    }
}

impl From<&DomainNewClientTrip> for NewClientTrip {
    fn from(record: &DomainNewClientTrip) -> Self {
        Self {
            client_id: record.client_id.get(),
            trip_id: record.trip_id.get(),
            registered_at: record.registered_at,
            payment_date: record.payment_date,
        }
    }
}
