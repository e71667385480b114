//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient};
use crate::domain::client_trip::{ClientTrip, NewClientTrip};
use crate::domain::trip::{Trip, TripDetails};
use crate::domain::types::{ClientId, Pesel, TripId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientReader, ClientTripReader, ClientTripWriter, ClientWriter, TripListQuery, TripReader,
};

mock! {
    pub Repository {}

    impl TripReader for Repository {
        fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>>;
        fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<TripDetails>)>;
    }

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn get_client_by_pesel(&self, pesel: &Pesel) -> RepositoryResult<Option<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
    }

    impl ClientTripReader for Repository {
        fn client_has_trips(&self, client_id: ClientId) -> RepositoryResult<bool>;
        fn client_trip_exists(&self, client_id: ClientId, trip_id: TripId) -> RepositoryResult<bool>;
    }

    impl ClientTripWriter for Repository {
        fn create_client_trip(&self, new_client_trip: &NewClientTrip) -> RepositoryResult<ClientTrip>;
    }
}
