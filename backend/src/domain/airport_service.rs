//! Airport service domain logic.
//!
//! Orchestrates every read and write of airport records. Writes are validated
//! first (see [`crate::domain::validation`]) and nothing reaches the store
//! unless validation and the duplicate check both pass.
//!
//! ## Business Rules
//!
//! - Identifiers are exactly four characters and unique
//! - City names cannot be empty
//! - Visit dates cannot be in the future
//! - Ratings run from 1 to 5 inclusive
//! - Edits replace city, date and rating together; the identifier never changes
//! - Editing or deleting an unknown identifier changes nothing and is not an error

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::commands::airports::{AddAirportCommand, EditAirportCommand};
use crate::domain::models::airport::{Airport, AirportError};
use crate::domain::validation::validate_airport;
use crate::storage::{AirportStorage, Connection};

#[derive(Clone)]
pub struct AirportService<C: Connection> {
    airport_repository: C::AirportRepository,
    // Held across check-then-write so concurrent adds of one identifier cannot both pass.
    write_lock: Arc<Mutex<()>>,
}

impl<C: Connection> AirportService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let airport_repository = connection.create_airport_repository();
        Self {
            airport_repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// List every stored airport in store order
    pub async fn list(&self) -> Result<Vec<Airport>, AirportError> {
        let airports = self.airport_repository.list_airports().await?;
        info!("Found {} airports", airports.len());
        Ok(airports)
    }

    /// Find an airport by identifier. A missing airport is `Ok(None)`.
    pub async fn find(&self, airport_id: &str) -> Result<Option<Airport>, AirportError> {
        let airport = self.airport_repository.get_airport(airport_id).await?;
        if airport.is_none() {
            warn!("Airport not found: {}", airport_id);
        }
        Ok(airport)
    }

    /// Record a newly visited airport
    pub async fn add(&self, command: AddAirportCommand) -> Result<Airport, AirportError> {
        info!("Adding airport: id={:?}, city={:?}", command.id, command.city);

        let now = Utc::now();
        let airport = validate_airport(
            command.id.as_deref(),
            command.city.as_deref(),
            &command.date_visited,
            command.rating,
            &now,
        )?;

        let _guard = self.write_lock.lock().await;

        if self.airport_repository.get_airport(&airport.id).await?.is_some() {
            warn!("Rejected duplicate airport: {}", airport.id);
            return Err(AirportError::duplicate_id());
        }

        let stored = self.airport_repository.insert_airport(&airport).await?;
        info!("Added airport {} in {}", stored.id, stored.city);
        Ok(stored)
    }

    /// Replace the city, visit date and rating of an existing airport
    ///
    /// Returns `Ok(None)` without changing anything when no airport has the identifier.
    pub async fn edit(&self, command: EditAirportCommand) -> Result<Option<Airport>, AirportError> {
        info!("Editing airport: id={:?}", command.id);

        let now = Utc::now();
        let candidate = validate_airport(
            command.id.as_deref(),
            command.city.as_deref(),
            &command.date_visited,
            command.rating,
            &now,
        )?;

        let _guard = self.write_lock.lock().await;

        let Some(mut airport) = self.airport_repository.get_airport(&candidate.id).await? else {
            warn!("Edit skipped, airport not found: {}", candidate.id);
            return Ok(None);
        };

        airport.city = candidate.city;
        airport.date_visited = candidate.date_visited;
        airport.rating = candidate.rating;

        let updated = self.airport_repository.update_airport(&airport).await?;
        info!("Updated airport {}", updated.id);
        Ok(Some(updated))
    }

    /// Delete the stored airport with the same identifier as `airport`
    pub async fn delete(&self, airport: &Airport) -> Result<Option<Airport>, AirportError> {
        self.delete_by_id(&airport.id).await
    }

    /// Delete an airport by identifier. Returns the removed airport, or None if nothing matched.
    pub async fn delete_by_id(&self, airport_id: &str) -> Result<Option<Airport>, AirportError> {
        info!("Deleting airport: {}", airport_id);

        let _guard = self.write_lock.lock().await;
        let removed = self.airport_repository.remove_airport(airport_id).await?;

        match &removed {
            Some(airport) => info!("Deleted airport {} in {}", airport.id, airport.city),
            None => warn!("Delete skipped, airport not found: {}", airport_id),
        }
        Ok(removed)
    }
}
