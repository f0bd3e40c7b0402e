//! Field validation for airport records.
//!
//! Every add and edit runs [`validate_airport`] before touching storage. The
//! guards run in a fixed order (identifier, city, date visited, rating) and the
//! first violation is returned, so precedence between failures is deterministic.
//!
//! The current time is always passed in. Nothing here reads the clock.

use chrono::{DateTime, Utc};

use crate::domain::models::airport::{Airport, AirportError};

pub const AIRPORT_ID_LENGTH: usize = 4;
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Check an airport identifier and return it trimmed: present, non-empty and
/// exactly four characters once surrounding whitespace is removed.
pub fn validate_id(id: Option<&str>) -> Result<&str, AirportError> {
    let id = match id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AirportError::NullArgument("Airport identifier is required".to_string())),
    };

    let length = id.chars().count();
    if length != AIRPORT_ID_LENGTH {
        return Err(AirportError::OutOfRange(format!(
            "Airport identifier must be exactly {} characters, got {}",
            AIRPORT_ID_LENGTH, length
        )));
    }

    Ok(id)
}

/// Check a city name and return it trimmed.
pub fn validate_city(city: Option<&str>) -> Result<&str, AirportError> {
    match city.map(str::trim) {
        Some(city) if !city.is_empty() => Ok(city),
        _ => Err(AirportError::NullArgument("City name cannot be empty".to_string())),
    }
}

/// Reject visits strictly after `now`. A visit at exactly `now` is accepted.
pub fn validate_date_visited(date_visited: &DateTime<Utc>, now: &DateTime<Utc>) -> Result<(), AirportError> {
    if date_visited > now {
        return Err(AirportError::invalid_date());
    }
    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), AirportError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AirportError::OutOfRange(format!(
            "Rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, rating
        )));
    }
    Ok(())
}

/// Validate all four fields and build the candidate entity.
pub fn validate_airport(
    id: Option<&str>,
    city: Option<&str>,
    date_visited: &DateTime<Utc>,
    rating: i32,
    now: &DateTime<Utc>,
) -> Result<Airport, AirportError> {
    let id = validate_id(id)?;
    let city = validate_city(city)?;
    validate_date_visited(date_visited, now)?;
    validate_rating(rating)?;

    Ok(Airport {
        id: id.to_string(),
        city: city.to_string(),
        date_visited: *date_visited,
        rating,
    })
}
