//! # Domain Module
//!
//! Contains all business logic for the airport tracker.
//!
//! ## Module Organization
//!
//! - **validation**: Pure field checks run before every write
//! - **airport_service**: Record manager for list, find, add, edit and delete
//! - **commands**: Internal input types the REST layer maps requests into
//! - **models**: The `Airport` entity and the `AirportError` taxonomy
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: Services depend on the storage traits, never on a backend
//! - **Fail Before Writing**: Validation and duplicate checks finish before any store mutation

pub mod airport_service;
pub mod commands;
pub mod models;
pub mod validation;

pub use airport_service::*;
pub use models::airport::{Airport, AirportError, AirportErrorKind};
