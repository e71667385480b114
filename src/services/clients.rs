//! Client deletion and registration of clients to trips.

use chrono::NaiveDateTime;

use crate::domain::client_trip::NewClientTrip;
use crate::domain::types::{ClientId, TripId};
use crate::forms::registration::RegisterClientPayload;
use crate::repository::errors::RepositoryError;
use crate::repository::{
    ClientReader, ClientTripReader, ClientTripWriter, ClientWriter, TripReader,
};
use crate::services::{ServiceError, ServiceResult};

pub const REGISTRATION_SUCCESSFUL: &str = "Registration successful.";

fn client_not_found(client_id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Client with ID {client_id} not found."))
}

/// Removes a client that is not registered for any trip.
///
/// Returns the confirmation message on success.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<String>
where
    R: ClientReader + ClientWriter + ClientTripReader + ?Sized,
{
    let Ok(id) = ClientId::new(client_id) else {
        return Err(client_not_found(client_id));
    };

    let client = repo
        .get_client_by_id(id)?
        .ok_or_else(|| client_not_found(client_id))?;

    if repo.client_has_trips(client.id)? {
        log::warn!("Refusing to delete client {client_id} with registered trips");
        return Err(ServiceError::InvalidState(format!(
            "Client with ID {client_id} is registered for one or more trips and cannot be deleted."
        )));
    }

    match repo.delete_client(client.id) {
        Ok(()) => {}
        // Removed concurrently between the lookup and the delete.
        Err(RepositoryError::NotFound) => return Err(client_not_found(client_id)),
        Err(err) => {
            log::error!("Failed to delete client {client_id}: {err}");
            return Err(err.into());
        }
    }

    log::info!("Deleted client {client_id}");
    Ok(format!(
        "Client with ID {client_id} has been deleted successfully."
    ))
}

/// Creates a client and registers them for a trip that has not started yet.
///
/// The client row is written before the trip is checked and each write commits
/// on its own, so a rejected trip still leaves the new client stored.
pub fn register_client_to_trip<R>(
    repo: &R,
    payload: RegisterClientPayload,
    now: NaiveDateTime,
) -> ServiceResult<String>
where
    R: ClientReader + ClientWriter + TripReader + ClientTripReader + ClientTripWriter + ?Sized,
{
    let RegisterClientPayload {
        new_client,
        trip_id,
        payment_date,
    } = payload;
    let pesel = new_client.pesel.clone();

    let pesel_taken = || ServiceError::Conflict(format!("Client with PESEL {pesel} already exists."));

    if repo.get_client_by_pesel(&pesel)?.is_some() {
        log::warn!("Rejected registration for existing PESEL {pesel}");
        return Err(pesel_taken());
    }

    let client = match repo.create_client(&new_client) {
        Ok(client) => client,
        // Another request stored the same PESEL after our lookup.
        Err(RepositoryError::ConstraintViolation(_)) => return Err(pesel_taken()),
        Err(err) => return Err(err.into()),
    };
    log::info!("Created client {} for PESEL {pesel}", client.id);

    let trip_unavailable = || {
        ServiceError::InvalidState(format!(
            "Trip ID {trip_id} does not exist or has already started."
        ))
    };

    let trip = match TripId::new(trip_id) {
        Ok(id) => repo.get_trip_by_id(id)?,
        Err(_) => None,
    };
    let trip = match trip {
        Some(trip) if trip.is_open_for_registration(now) => trip,
        _ => {
            log::warn!(
                "Trip {trip_id} is missing or started; client {} stays stored",
                client.id
            );
            return Err(trip_unavailable());
        }
    };

    let already_registered = || {
        ServiceError::Conflict(format!(
            "Client with PESEL {pesel} is already registered for trip ID {}.",
            trip.id
        ))
    };

    if repo.client_trip_exists(client.id, trip.id)? {
        return Err(already_registered());
    }

    let new_client_trip = NewClientTrip::new(client.id, trip.id, now, payment_date);
    match repo.create_client_trip(&new_client_trip) {
        Ok(_) => {}
        Err(RepositoryError::ConstraintViolation(_)) => return Err(already_registered()),
        Err(err) => return Err(err.into()),
    }

    log::info!("Registered client {} for trip {}", client.id, trip.id);
    Ok(REGISTRATION_SUCCESSFUL.to_string())
}
