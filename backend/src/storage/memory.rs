//! In-memory airport storage.
//!
//! Keeps airports in an insertion-ordered vector shared by every repository
//! created from the same [`MemoryConnection`]. Nothing survives a restart.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::models::airport::Airport;
use crate::storage::traits::{AirportStorage, Connection};

#[derive(Clone, Default)]
pub struct MemoryConnection {
    airports: Arc<RwLock<Vec<Airport>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    type AirportRepository = MemoryAirportRepository;

    fn create_airport_repository(&self) -> Self::AirportRepository {
        MemoryAirportRepository::new(self.clone())
    }
}

/// Repository for airport operations backed by [`MemoryConnection`]
#[derive(Clone)]
pub struct MemoryAirportRepository {
    connection: MemoryConnection,
}

impl MemoryAirportRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl AirportStorage for MemoryAirportRepository {
    async fn list_airports(&self) -> Result<Vec<Airport>> {
        Ok(self.connection.airports.read().await.clone())
    }

    async fn get_airport(&self, airport_id: &str) -> Result<Option<Airport>> {
        let airports = self.connection.airports.read().await;
        Ok(airports.iter().find(|a| a.id == airport_id).cloned())
    }

    async fn insert_airport(&self, airport: &Airport) -> Result<Airport> {
        let mut airports = self.connection.airports.write().await;
        if airports.iter().any(|a| a.id == airport.id) {
            bail!("Airport {} is already stored", airport.id);
        }
        airports.push(airport.clone());
        debug!("Stored airport {} ({} total)", airport.id, airports.len());
        Ok(airport.clone())
    }

    async fn update_airport(&self, airport: &Airport) -> Result<Airport> {
        let mut airports = self.connection.airports.write().await;
        match airports.iter_mut().find(|a| a.id == airport.id) {
            Some(stored) => {
                *stored = airport.clone();
                Ok(airport.clone())
            }
            None => bail!("Airport {} is not stored", airport.id),
        }
    }

    async fn remove_airport(&self, airport_id: &str) -> Result<Option<Airport>> {
        let mut airports = self.connection.airports.write().await;
        let removed = airports
            .iter()
            .position(|a| a.id == airport_id)
            .map(|index| airports.remove(index));
        Ok(removed)
    }
}
