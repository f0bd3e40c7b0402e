//! # SQLite Storage Module
//!
//! SQLite-backed airport storage using SQLx.
//!
//! - **connection.rs** - database creation, schema setup and the connection pool
//! - **airport_repository.rs** - [`AirportStorage`](crate::storage::AirportStorage) over the `airports` table

pub mod airport_repository;
pub mod connection;

pub use airport_repository::AirportRepository;
pub use connection::DbConnection;
