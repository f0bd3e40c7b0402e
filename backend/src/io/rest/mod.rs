//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the airport tracker.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Mapping public DTOs to domain commands
//! - Error translation from domain errors to HTTP status codes
//!
//! ## Error Mapping
//!
//! | Domain error | Status |
//! |---|---|
//! | `NullArgument`, `OutOfRange`, `InvalidDate` | 400 |
//! | `DuplicateId` | 409 |
//! | `Storage` | 500 |

pub mod airport_apis;
pub mod mappers;

pub use airport_apis::*;
