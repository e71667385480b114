//! Trip listing.

use crate::dto::trips::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, TripDto, TripsPage, TripsQuery};
use crate::repository::{TripListQuery, TripReader};
use crate::services::ServiceResult;

/// Returns one page of trips ordered by name with their countries and clients.
///
/// Page parameters are echoed back as received.
pub fn list_trips<R>(repo: &R, query: TripsQuery) -> ServiceResult<TripsPage>
where
    R: TripReader + ?Sized,
{
    let page_number = query.page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
    let page_size = query.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

    let (total_records, trips) = repo
        .list_trips(TripListQuery::new().paginate(page_number, page_size))
        .map_err(|err| {
            log::error!("Failed to list trips: {err}");
            err
        })?;

    Ok(TripsPage {
        page_number,
        page_size,
        total_records,
        trips: trips.into_iter().map(TripDto::from).collect(),
    })
}
