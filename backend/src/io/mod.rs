//! # IO Module
//!
//! Interface layer between HTTP clients and the domain logic. Translates
//! requests into domain commands and domain results into JSON responses.

pub mod rest;

pub use rest::*;
