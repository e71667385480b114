use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient},
        client_trip::{ClientTrip, NewClientTrip},
        trip::{Trip, TripDetails},
        types::{ClientId, Pesel, TripId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod client_trip;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod trip;

/// Requested page of a listing.
///
/// Values are taken as given by the caller; see [`Pagination::offset`] and
/// [`Pagination::limit`] for how out-of-range values are turned into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Pagination {
    /// Number of rows to skip, never negative.
    pub fn offset(&self) -> i64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .max(0)
    }

    /// Number of rows to return, never negative.
    ///
    /// SQLite treats a negative `LIMIT` as "no limit", so it is clamped to zero.
    pub fn limit(&self) -> i64 {
        self.per_page.max(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TripListQuery {
    pub pagination: Option<Pagination>,
}

impl TripListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait TripReader {
    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>>;
    /// Returns the total number of trips and the requested page ordered by name.
    fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<TripDetails>)>;
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn get_client_by_pesel(&self, pesel: &Pesel) -> RepositoryResult<Option<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
}

pub trait ClientTripReader {
    /// Whether any registration references the client.
    fn client_has_trips(&self, client_id: ClientId) -> RepositoryResult<bool>;
    fn client_trip_exists(&self, client_id: ClientId, trip_id: TripId) -> RepositoryResult<bool>;
}

pub trait ClientTripWriter {
    fn create_client_trip(&self, new_client_trip: &NewClientTrip) -> RepositoryResult<ClientTrip>;
}
