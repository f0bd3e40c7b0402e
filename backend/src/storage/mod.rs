//! # Storage Module
//!
//! Handles all data persistence for the airport tracker.
//!
//! The domain layer only sees the [`AirportStorage`] and [`Connection`] traits,
//! so the backend can be swapped without touching validation or service logic.
//!
//! ## Implementations
//!
//! - **sqlite**: SQLite database through SQLx, the default for the server
//! - **memory**: shared in-memory vector, used by domain tests and for
//!   throwaway server runs

pub mod memory;
pub mod sqlite;
pub mod traits;

pub use memory::{MemoryAirportRepository, MemoryConnection};
pub use sqlite::{AirportRepository, DbConnection};
pub use traits::{AirportStorage, Connection};
