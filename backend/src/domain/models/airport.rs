//! Domain model for a visited airport and the errors raised while guarding it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message carried by [`AirportError::InvalidDate`]. Callers match on this text.
pub const INVALID_DATE_MARKER: &str = "Date visited cannot be in the future";

/// Message carried by [`AirportError::DuplicateId`]. Callers match on this text.
pub const DUPLICATE_ID_MARKER: &str = "An airport with this identifier already exists";

/// Domain model representing one visited airport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: String,
    pub city: String,
    pub date_visited: DateTime<Utc>,
    pub rating: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum AirportError {
    #[error("{0}")]
    NullArgument(String),
    #[error("{0}")]
    OutOfRange(String),
    #[error("{0}")]
    InvalidDate(String),
    #[error("{0}")]
    DuplicateId(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Payload-free discriminant of [`AirportError`] for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirportErrorKind {
    NullArgument,
    OutOfRange,
    InvalidDate,
    DuplicateId,
    Storage,
}

impl AirportError {
    pub fn invalid_date() -> Self {
        AirportError::InvalidDate(INVALID_DATE_MARKER.to_string())
    }

    pub fn duplicate_id() -> Self {
        AirportError::DuplicateId(DUPLICATE_ID_MARKER.to_string())
    }

    pub fn kind(&self) -> AirportErrorKind {
        match self {
            AirportError::NullArgument(_) => AirportErrorKind::NullArgument,
            AirportError::OutOfRange(_) => AirportErrorKind::OutOfRange,
            AirportError::InvalidDate(_) => AirportErrorKind::InvalidDate,
            AirportError::DuplicateId(_) => AirportErrorKind::DuplicateId,
            AirportError::Storage(_) => AirportErrorKind::Storage,
        }
    }

    /// True for malformed-input failures. `DuplicateId` is a business-rule
    /// conflict and `Storage` an infrastructure failure, so neither counts.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind(),
            AirportErrorKind::NullArgument | AirportErrorKind::OutOfRange | AirportErrorKind::InvalidDate
        )
    }
}

impl AirportErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AirportErrorKind::NullArgument => "NullArgument",
            AirportErrorKind::OutOfRange => "OutOfRange",
            AirportErrorKind::InvalidDate => "InvalidDate",
            AirportErrorKind::DuplicateId => "DuplicateId",
            AirportErrorKind::Storage => "Storage",
        }
    }
}

impl fmt::Display for AirportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
