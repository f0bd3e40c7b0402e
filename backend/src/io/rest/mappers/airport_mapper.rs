use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::domain::commands::airports::{AddAirportCommand, EditAirportCommand};
use crate::domain::models::airport::Airport as DomainAirport;
use shared::{
    Airport as SharedAirport, AirportListResponse, AirportResponse, CreateAirportRequest,
    UpdateAirportRequest,
};

/// Mapper to convert between shared airport DTOs and domain models/commands.
pub struct AirportMapper;

impl AirportMapper {
    /// Converts a domain Airport model to a shared Airport DTO.
    pub fn to_dto(domain: DomainAirport) -> SharedAirport {
        SharedAirport {
            id: domain.id,
            city: domain.city,
            date_visited: domain.date_visited.to_rfc3339(),
            rating: domain.rating,
        }
    }

    pub fn to_add_command(request: CreateAirportRequest) -> Result<AddAirportCommand> {
        Ok(AddAirportCommand {
            id: request.id,
            city: request.city,
            date_visited: Self::parse_date_visited(&request.date_visited)?,
            rating: request.rating,
        })
    }

    pub fn to_edit_command(airport_id: String, request: UpdateAirportRequest) -> Result<EditAirportCommand> {
        Ok(EditAirportCommand {
            id: Some(airport_id),
            city: request.city,
            date_visited: Self::parse_date_visited(&request.date_visited)?,
            rating: request.rating,
        })
    }

    pub fn to_airport_list_dto(domain_airports: Vec<DomainAirport>) -> AirportListResponse {
        AirportListResponse {
            airports: domain_airports.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_airport_response_dto(domain: DomainAirport, message: &str) -> AirportResponse {
        AirportResponse {
            airport: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    fn parse_date_visited(value: &str) -> Result<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(value)
            .with_context(|| format!("date_visited must be an RFC 3339 timestamp, got '{}'", value))?;
        Ok(parsed.with_timezone(&Utc))
    }
}
