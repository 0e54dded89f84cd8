//! Habit Module
//!
//! A self-contained library for keeping habit records: named recurring
//! activities with a cadence (daily or weekly), an occurrence target per
//! cadence period, a start date, and free-form notes.
//!
//! # Features
//!
//! - Create and list operations over a single `habits` collection
//! - Field-keyed payload validation with all violations reported in one pass
//! - Ready-to-use HTTP handlers and routes
//! - Database migrations included
//!
//! # Usage
//!
//! ```rust,ignore
//! use habitd::habit;
//!
//! // Get the migrations to run
//! for (name, sql) in habit::migrations() {
//!     // Run migration...
//! }
//!
//! // Mount the routes
//! let app = Router::new()
//!     .nest("/api", habit::routes())
//!     .with_state(app_state);
//!
//! // Use the library directly
//! let store = habit::Habits::new(connection);
//! let habit = store.insert(input).await?;
//! ```

mod handler;
mod lib;
mod routes;
pub mod validate;

// Re-export the core library types and functions
pub use lib::*;

// Re-export the routes function
pub use routes::routes;

/// Returns the migrations for the habit module.
///
/// These should be run during application startup to ensure the database
/// schema is up to date.
pub fn migrations() -> &'static [(&'static str, &'static str)] {
    &[(
        "habit_001_schema.sql",
        include_str!("migrations/001_schema.sql"),
    )]
}
