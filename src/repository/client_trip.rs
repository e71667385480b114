use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        client_trip::{ClientTrip, NewClientTrip},
        types::{ClientId, TripId},
    },
    models::client_trip::{ClientTrip as DbClientTrip, NewClientTrip as DbNewClientTrip},
    repository::{ClientTripReader, ClientTripWriter, DieselRepository, errors::RepositoryResult},
};

impl ClientTripReader for DieselRepository {
    fn client_has_trips(&self, client_id: ClientId) -> RepositoryResult<bool> {
        use crate::schema::client_trip;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(
            client_trip::table.filter(client_trip::client_id.eq(client_id.get())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn client_trip_exists(&self, client_id: ClientId, trip_id: TripId) -> RepositoryResult<bool> {
        use crate::schema::client_trip;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(
            client_trip::table.find((client_id.get(), trip_id.get())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }
}

impl ClientTripWriter for DieselRepository {
    fn create_client_trip(&self, new_client_trip: &NewClientTrip) -> RepositoryResult<ClientTrip> {
        use crate::schema::client_trip;

        let mut conn = self.conn()?;
        let insertable: DbNewClientTrip = new_client_trip.into();

        let db_record = diesel::insert_into(client_trip::table)
            .values(&insertable)
            .returning(DbClientTrip::as_returning())
            .get_result::<DbClientTrip>(&mut conn)?;

        Ok(ClientTrip::try_from(db_record)?)
    }
}
