//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod airports {
    use chrono::{DateTime, Utc};

    /// Input for recording a newly visited airport.
    ///
    /// `id` and `city` are optional so that a missing value reaches the
    /// validator and is reported as `NullArgument`.
    #[derive(Debug, Clone)]
    pub struct AddAirportCommand {
        pub id: Option<String>,
        pub city: Option<String>,
        pub date_visited: DateTime<Utc>,
        pub rating: i32,
    }

    /// Full replacement of an existing airport's city, visit date and rating.
    /// `id` selects the record and is never changed.
    #[derive(Debug, Clone)]
    pub struct EditAirportCommand {
        pub id: Option<String>,
        pub city: Option<String>,
        pub date_visited: DateTime<Utc>,
        pub rating: i32,
    }
}
