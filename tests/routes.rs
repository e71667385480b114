use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use trip_registry::routes::configure;

mod common;

fn registration_body(pesel: &str, trip_id: i32) -> Value {
    json!({
        "firstName": "Jan",
        "lastName": "Kowalski",
        "email": "jan@example.com",
        "telephone": "600100200",
        "pesel": pesel,
        "idTrip": trip_id,
        "paymentDate": null
    })
}

#[actix_web::test]
async fn registration_flow_over_http() {
    let test_db = common::TestDb::new("registration_flow_over_http.db");
    let trip_id = test_db.seed_trip("Alps", Utc::now().naive_utc() + Duration::days(1));
    let country = test_db.seed_country("Austria");
    test_db.link_country(country, trip_id);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .set_json(registration_body("90010112345", trip_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Registration successful.");

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .set_json(registration_body("90010112345", trip_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get()
        .uri("/api/trips?pageNumber=1&pageSize=5")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["pageNumber"], 1);
    assert_eq!(page["pageSize"], 5);
    assert_eq!(page["totalRecords"], 1);
    assert_eq!(page["trips"][0]["name"], "Alps");
    assert_eq!(page["trips"][0]["countries"][0]["name"], "Austria");
    assert_eq!(page["trips"][0]["clients"][0]["firstName"], "Jan");
    assert_eq!(page["trips"][0]["clients"][0]["lastName"], "Kowalski");

    // The registered client cannot be deleted.
    let req = test::TestRequest::delete()
        .uri("/api/trips/clients/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test_db.count_clients(), 1);
}

#[actix_web::test]
async fn registration_for_started_trip_is_bad_request() {
    let test_db = common::TestDb::new("registration_for_started_trip_is_bad_request.db");
    let trip_id = test_db.seed_trip("Past", Utc::now().naive_utc() - Duration::days(1));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .set_json(registration_body("90010112345", trip_id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test_db.count_clients(), 1);
    assert_eq!(test_db.count_client_trips(), 0);
}

#[actix_web::test]
async fn invalid_payload_is_rejected_before_any_write() {
    let test_db = common::TestDb::new("invalid_payload_is_rejected_before_any_write.db");
    let trip_id = test_db.seed_trip("Alps", Utc::now().naive_utc() + Duration::days(1));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .set_json(registration_body("123", trip_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(test_db.count_clients(), 0);
}

#[actix_web::test]
async fn registration_uses_trip_id_from_body() {
    let test_db = common::TestDb::new("registration_uses_trip_id_from_body.db");
    let past = test_db.seed_trip("Past", Utc::now().naive_utc() - Duration::days(1));
    let future = test_db.seed_trip("Future", Utc::now().naive_utc() + Duration::days(1));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{past}/clients"))
        .set_json(registration_body("90010112345", future))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test_db.count_client_trips(), 1);
    test_db.registered_at(1, future);
}

#[actix_web::test]
async fn registration_accepts_utc_payment_date() {
    let test_db = common::TestDb::new("registration_accepts_utc_payment_date.db");
    let trip_id = test_db.seed_trip("Alps", Utc::now().naive_utc() + Duration::days(1));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let mut body = registration_body("90010112345", trip_id);
    body["paymentDate"] = json!("2026-10-25T10:00:00Z");
    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let mut body = registration_body("85020254321", trip_id);
    body["paymentDate"] = json!("2026-10-25");
    let req = test::TestRequest::post()
        .uri(&format!("/api/trips/{trip_id}/clients"))
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test_db.count_client_trips(), 2);
}

#[actix_web::test]
async fn legacy_client_row_can_be_deleted() {
    let test_db = common::TestDb::new("legacy_client_row_can_be_deleted.db");
    let client_id = test_db.insert_raw_client("Ewa", "Lis", "not-an-email", "123");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/trips/clients/{client_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test_db.count_clients(), 0);
}

#[actix_web::test]
async fn delete_client_statuses() {
    let test_db = common::TestDb::new("delete_client_statuses.db");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::delete()
        .uri("/api/trips/clients/5")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Client with ID 5 not found.");

    // A client left behind by a registration for a missing trip.
    let req = test::TestRequest::post()
        .uri("/api/trips/999/clients")
        .set_json(registration_body("90010112345", 999))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test_db.count_clients(), 1);

    let req = test::TestRequest::delete()
        .uri("/api/trips/clients/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(test_db.count_clients(), 0);
}

#[actix_web::test]
async fn listing_defaults_and_empty_pages() {
    let test_db = common::TestDb::new("listing_defaults_and_empty_pages.db");
    test_db.seed_trip("Only", Utc::now().naive_utc() + Duration::days(1));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(test_db.repo()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/trips").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["pageNumber"], 1);
    assert_eq!(page["pageSize"], 10);
    assert_eq!(page["trips"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get()
        .uri("/api/trips?pageNumber=3&pageSize=10")
        .to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page["totalRecords"], 1);
    assert_eq!(page["trips"].as_array().map(Vec::len), Some(0));
}
