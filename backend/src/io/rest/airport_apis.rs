//! # REST API for Airport Management
//!
//! Endpoints for listing, retrieving, recording, editing and deleting visited airports.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use crate::domain::models::airport::{AirportError, AirportErrorKind};
use crate::io::rest::mappers::airport_mapper::AirportMapper;
use crate::storage::Connection;
use crate::AppState;
use shared::{CreateAirportRequest, DeleteAirportResponse, ErrorResponse, UpdateAirportRequest};

/// Translate a domain failure into a status code and an `ErrorResponse` body
fn error_response(error: AirportError) -> Response {
    let status = match error.kind() {
        AirportErrorKind::NullArgument | AirportErrorKind::OutOfRange | AirportErrorKind::InvalidDate => {
            StatusCode::BAD_REQUEST
        }
        AirportErrorKind::DuplicateId => StatusCode::CONFLICT,
        AirportErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match &error {
        AirportError::Storage(e) => {
            error!("Storage failure: {:#}", e);
            "Error accessing airport storage".to_string()
        }
        other => {
            warn!("Rejected airport request: {}", other);
            other.to_string()
        }
    };

    let body = ErrorResponse {
        kind: error.kind().to_string(),
        message,
    };
    (status, Json(body)).into_response()
}

fn malformed_request(message: String) -> Response {
    warn!("Malformed airport request: {}", message);
    let body = ErrorResponse {
        kind: "MalformedRequest".to_string(),
        message,
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

fn not_found(airport_id: &str) -> Response {
    let body = ErrorResponse {
        kind: "NotFound".to_string(),
        message: format!("Airport not found: {}", airport_id),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// List all airports
pub async fn list_airports<C: Connection>(State(state): State<AppState<C>>) -> impl IntoResponse {
    info!("GET /api/airports");

    match state.airport_service.list().await {
        Ok(airports) => (StatusCode::OK, Json(AirportMapper::to_airport_list_dto(airports))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Get an airport by identifier
pub async fn get_airport<C: Connection>(
    State(state): State<AppState<C>>,
    Path(airport_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/airports/{}", airport_id);

    match state.airport_service.find(&airport_id).await {
        Ok(Some(airport)) => (StatusCode::OK, Json(AirportMapper::to_dto(airport))).into_response(),
        Ok(None) => not_found(&airport_id),
        Err(e) => error_response(e),
    }
}

/// Record a newly visited airport
pub async fn create_airport<C: Connection>(
    State(state): State<AppState<C>>,
    payload: Result<Json<CreateAirportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_request(rejection.body_text()),
    };
    info!("POST /api/airports - request: {:?}", request);

    let command = match AirportMapper::to_add_command(request) {
        Ok(command) => command,
        Err(e) => return malformed_request(format!("{:#}", e)),
    };

    match state.airport_service.add(command).await {
        Ok(airport) => {
            let response = AirportMapper::to_airport_response_dto(airport, "Airport added successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Replace an airport's city, visit date and rating
pub async fn update_airport<C: Connection>(
    State(state): State<AppState<C>>,
    Path(airport_id): Path<String>,
    payload: Result<Json<UpdateAirportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return malformed_request(rejection.body_text()),
    };
    info!("PUT /api/airports/{} - request: {:?}", airport_id, request);

    let command = match AirportMapper::to_edit_command(airport_id.clone(), request) {
        Ok(command) => command,
        Err(e) => return malformed_request(format!("{:#}", e)),
    };

    match state.airport_service.edit(command).await {
        Ok(Some(airport)) => {
            let response = AirportMapper::to_airport_response_dto(airport, "Airport updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(None) => not_found(&airport_id),
        Err(e) => error_response(e),
    }
}

/// Delete an airport. Deleting an unknown identifier succeeds with nothing removed.
pub async fn delete_airport<C: Connection>(
    State(state): State<AppState<C>>,
    Path(airport_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/airports/{}", airport_id);

    match state.airport_service.delete_by_id(&airport_id).await {
        Ok(removed) => {
            let success_message = if removed.is_some() {
                "Airport deleted successfully"
            } else {
                "No airport with that identifier"
            };
            let response = DeleteAirportResponse {
                deleted: removed.map(AirportMapper::to_dto),
                success_message: success_message.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::models::airport::{DUPLICATE_ID_MARKER, INVALID_DATE_MARKER};
    use crate::storage::MemoryConnection;
    use crate::{create_router, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
        Router,
    };
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use shared::{Airport, AirportListResponse, AirportResponse};
    use tower::ServiceExt;

    fn setup_test_router() -> Router {
        let state = AppState::new(MemoryConnection::new());
        create_router(state, &AppConfig::default())
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.expect("Request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body");
        (status, bytes.to_vec())
    }

    fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).expect("Failed to parse response body")
    }

    fn create_body(id: &str, city: &str, rating: i32) -> serde_json::Value {
        json!({
            "id": id,
            "city": city,
            "date_visited": "2023-07-04T15:30:00Z",
            "rating": rating,
        })
    }

    #[tokio::test]
    async fn test_create_and_get_airport() {
        let router = setup_test_router();

        let (status, body) = send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Seattle", 5))).await;
        assert_eq!(status, StatusCode::CREATED);
        let created: AirportResponse = parse(&body);
        assert_eq!(created.airport.id, "KSEA");
        assert_eq!(created.success_message, "Airport added successfully");

        let (status, body) = send(&router, Method::GET, "/api/airports/KSEA", None).await;
        assert_eq!(status, StatusCode::OK);
        let airport: Airport = parse(&body);
        assert_eq!(airport, created.airport);
    }

    #[tokio::test]
    async fn test_list_airports() {
        let router = setup_test_router();
        send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Seattle", 5))).await;
        send(&router, Method::POST, "/api/airports", Some(create_body("KPDX", "Portland", 4))).await;

        let (status, body) = send(&router, Method::GET, "/api/airports", None).await;

        assert_eq!(status, StatusCode::OK);
        let list: AirportListResponse = parse(&body);
        let ids: Vec<&str> = list.airports.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["KSEA", "KPDX"]);
    }

    #[tokio::test]
    async fn test_validation_failures_are_bad_requests() {
        let router = setup_test_router();

        let (status, body) = send(&router, Method::POST, "/api/airports", Some(create_body("LONGID", "Seattle", 5))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse::<ErrorResponse>(&body).kind, "OutOfRange");

        let missing_city = json!({ "id": "KSEA", "date_visited": "2023-07-04T15:30:00Z", "rating": 3 });
        let (status, body) = send(&router, Method::POST, "/api/airports", Some(missing_city)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse::<ErrorResponse>(&body).kind, "NullArgument");

        let future = json!({ "id": "KSEA", "city": "Seattle", "date_visited": "2999-01-01T00:00:00Z", "rating": 3 });
        let (status, body) = send(&router, Method::POST, "/api/airports", Some(future)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = parse(&body);
        assert_eq!(error.kind, "InvalidDate");
        assert_eq!(error.message, INVALID_DATE_MARKER);

        let (_, body) = send(&router, Method::GET, "/api/airports", None).await;
        assert!(parse::<AirportListResponse>(&body).airports.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_is_conflict() {
        let router = setup_test_router();
        send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Seattle", 5))).await;

        let (status, body) = send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Tacoma", 2))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        let error: ErrorResponse = parse(&body);
        assert_eq!(error.kind, "DuplicateId");
        assert_eq!(error.message, DUPLICATE_ID_MARKER);
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let router = setup_test_router();
        let body = json!({ "id": "KSEA", "city": "Seattle", "date_visited": "last tuesday", "rating": 3 });

        let (status, body) = send(&router, Method::POST, "/api/airports", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse::<ErrorResponse>(&body).kind, "MalformedRequest");
    }

    #[tokio::test]
    async fn test_missing_rating_is_error_response() {
        let router = setup_test_router();
        let body = json!({ "id": "KSEA", "city": "Seattle", "date_visited": "2023-01-01T00:00:00Z" });

        let (status, body) = send(&router, Method::POST, "/api/airports", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = parse(&body);
        assert_eq!(error.kind, "MalformedRequest");
        assert!(error.message.contains("rating"));

        let (_, body) = send(&router, Method::GET, "/api/airports", None).await;
        assert!(parse::<AirportListResponse>(&body).airports.is_empty());
    }

    #[tokio::test]
    async fn test_wrongly_typed_update_is_error_response() {
        let router = setup_test_router();
        send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Seattle", 5))).await;
        let update = json!({ "city": "Tacoma", "date_visited": "2023-08-01T00:00:00Z", "rating": "five" });

        let (status, body) = send(&router, Method::PUT, "/api/airports/KSEA", Some(update)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse::<ErrorResponse>(&body).kind, "MalformedRequest");

        let (_, body) = send(&router, Method::GET, "/api/airports/KSEA", None).await;
        assert_eq!(parse::<Airport>(&body).rating, 5);
    }

    #[tokio::test]
    async fn test_update_airport() {
        let router = setup_test_router();
        send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Seattle", 5))).await;

        let update = json!({ "city": "Tacoma", "date_visited": "2023-08-01T00:00:00Z", "rating": 2 });
        let (status, body) = send(&router, Method::PUT, "/api/airports/KSEA", Some(update)).await;

        assert_eq!(status, StatusCode::OK);
        let updated: AirportResponse = parse(&body);
        assert_eq!(updated.airport.city, "Tacoma");
        assert_eq!(updated.airport.rating, 2);

        let bad_rating = json!({ "city": "Tacoma", "date_visited": "2023-08-01T00:00:00Z", "rating": 7 });
        let (status, _) = send(&router, Method::PUT, "/api/airports/KSEA", Some(bad_rating)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&router, Method::GET, "/api/airports/KSEA", None).await;
        assert_eq!(parse::<Airport>(&body).rating, 2);
    }

    #[tokio::test]
    async fn test_missing_airport_is_not_found() {
        let router = setup_test_router();
        let update = json!({ "city": "Los Angeles", "date_visited": "2023-08-01T00:00:00Z", "rating": 3 });

        let (status, _) = send(&router, Method::GET, "/api/airports/KLAX", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&router, Method::PUT, "/api/airports/KLAX", Some(update)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_airport() {
        let router = setup_test_router();
        send(&router, Method::POST, "/api/airports", Some(create_body("KSEA", "Seattle", 5))).await;

        let (status, body) = send(&router, Method::DELETE, "/api/airports/KSEA", None).await;
        assert_eq!(status, StatusCode::OK);
        let deleted: DeleteAirportResponse = parse(&body);
        assert_eq!(deleted.deleted.map(|a| a.id), Some("KSEA".to_string()));

        let (status, body) = send(&router, Method::DELETE, "/api/airports/KSEA", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(parse::<DeleteAirportResponse>(&body).deleted.is_none());

        let (status, _) = send(&router, Method::GET, "/api/airports/KSEA", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
