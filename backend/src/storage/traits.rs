//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::airport::Airport;

/// Trait defining the interface for airport storage operations
///
/// Implementations must give read-after-write consistency: a `get_airport` or
/// `list_airports` issued after a completed write observes that write.
#[async_trait]
pub trait AirportStorage: Send + Sync {
    /// List every stored airport in insertion order
    async fn list_airports(&self) -> Result<Vec<Airport>>;

    /// Retrieve a specific airport by identifier
    async fn get_airport(&self, airport_id: &str) -> Result<Option<Airport>>;

    /// Store a new airport. Fails if the identifier is already stored.
    async fn insert_airport(&self, airport: &Airport) -> Result<Airport>;

    /// Replace the stored fields of an existing airport
    async fn update_airport(&self, airport: &Airport) -> Result<Airport>;

    /// Remove an airport by identifier
    /// Returns the removed airport, or None if nothing was stored under that identifier
    async fn remove_airport(&self, airport_id: &str) -> Result<Option<Airport>>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type (SQLite, in-memory)
/// and provides factory methods for creating repositories. This allows the domain
/// layer to work with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone + 'static {
    /// The type of AirportStorage this connection creates
    type AirportRepository: AirportStorage + Clone + 'static;

    /// Create a new airport repository for this connection
    fn create_airport_repository(&self) -> Self::AirportRepository;
}
