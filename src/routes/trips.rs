use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, delete, get, post, web};
use chrono::Utc;

use crate::dto::trips::TripsQuery;
use crate::forms::registration::RegisterClientForm;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{ServiceError, clients as clients_service, trips as trips_service};

#[get("/trips")]
/// Paginated list of trips ordered by name.
pub async fn list_trips(
    query: web::Query<TripsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match trips_service::list_trips(repo.get_ref(), query.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => service_error_response(err, "Failed to list trips"),
    }
}

#[delete("/trips/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(message) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(message),
        Err(err) => service_error_response(err, "Failed to delete client"),
    }
}

#[post("/trips/{trip_id}/clients")]
/// Registers a new client, identified by PESEL, for the trip named by the
/// body's `idTrip`. The path segment only routes the request.
pub async fn register_client(
    path_trip_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<RegisterClientForm>,
) -> impl Responder {
    if path_trip_id.as_str() != form.id_trip.to_string() {
        log::debug!(
            "Registration path names trip {} but body names {}",
            path_trip_id.as_str(),
            form.id_trip
        );
    }

    let payload = match form.into_payload() {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("Rejected registration payload: {err}");
            return service_error_response(ServiceError::from(err), "Invalid registration");
        }
    };

    let now = Utc::now().naive_utc();
    match clients_service::register_client_to_trip(repo.get_ref(), payload, now) {
        Ok(message) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(message),
        Err(err) => service_error_response(err, "Failed to register client"),
    }
}
