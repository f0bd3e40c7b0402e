use serde::{Deserialize, Serialize};

/// A visited airport as exchanged over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Four character airport identifier (e.g. "KSEA")
    pub id: String,
    /// City the airport serves
    pub city: String,
    /// When the airport was visited (RFC 3339)
    pub date_visited: String,
    /// Rating from 1 to 5 inclusive
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAirportRequest {
    /// Four character identifier, required
    pub id: Option<String>,
    /// City name, required
    pub city: Option<String>,
    /// Visit timestamp (RFC 3339), must not be in the future
    pub date_visited: String,
    pub rating: i32,
}

/// Full replacement of an airport's mutable fields. The identifier comes from the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAirportRequest {
    pub city: Option<String>,
    pub date_visited: String,
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportResponse {
    pub airport: Airport,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportListResponse {
    pub airports: Vec<Airport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAirportResponse {
    /// The removed airport, or None when nothing matched the identifier
    pub deleted: Option<Airport>,
    pub success_message: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error kind name, e.g. "OutOfRange" or "DuplicateId"
    pub kind: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_missing_fields() {
        let json = r#"{"date_visited":"2024-05-01T10:00:00Z","rating":3}"#;
        let request: CreateAirportRequest = serde_json::from_str(json).expect("Failed to parse request");

        assert!(request.id.is_none());
        assert!(request.city.is_none());
        assert_eq!(request.rating, 3);
    }

    #[test]
    fn test_delete_response_serializes_null_when_nothing_removed() {
        let response = DeleteAirportResponse {
            deleted: None,
            success_message: "No airport removed".to_string(),
        };
        let value = serde_json::to_value(&response).expect("Failed to serialize response");

        assert!(value["deleted"].is_null());
    }
}
