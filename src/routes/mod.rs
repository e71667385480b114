//! HTTP surface of the trip registry.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error, web};

use crate::services::ServiceError;

pub mod trips;

/// Registers the API routes and the JSON body configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            .service(trips::list_trips)
            .service(trips::delete_client)
            .service(trips::register_client),
    );
}

/// Rejects malformed JSON bodies with a plain-text 400 response.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, plain_text(HttpResponse::BadRequest(), message))
            .into()
    })
}

fn plain_text(mut builder: actix_web::HttpResponseBuilder, message: String) -> HttpResponse {
    builder.content_type(ContentType::plaintext()).body(message)
}

/// Maps a service failure to its HTTP status.
///
/// Store failures are logged here and answered with a generic body.
pub fn service_error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound(message) => plain_text(HttpResponse::NotFound(), message),
        ServiceError::Conflict(message) => plain_text(HttpResponse::Conflict(), message),
        ServiceError::InvalidState(message)
        | ServiceError::Form(message)
        | ServiceError::TypeConstraint(message) => plain_text(HttpResponse::BadRequest(), message),
        ServiceError::Repository(err) => {
            log::error!("{context}: {err}");
            plain_text(
                HttpResponse::InternalServerError(),
                "Internal server error".to_string(),
            )
        }
    }
}
