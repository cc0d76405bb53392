//! # tripboard
//!
//! An editable weekend-trip itinerary with per-stop checklist progress,
//! persisted to a local key-value store.
//!
//! ## Usage
//!
//! ```bash
//! tripboard show
//! tripboard toggle fri-land
//! tripboard edit-item 0 2 title "Old Town at dusk"
//! tripboard reset --yes
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration layering, logging setup and fatal error reporting
//! - `cli` - Argument parsing and routing of commands to store operations
//! - `error` - Crate-wide error type with stable error codes
//! - `itinerary` - Trip data model, seed data, persistence codec and the store
//! - `render` - Plain-text and JSON rendering of a trip snapshot
//! - `storage` - Key-value persistence surface with file and memory backends
pub mod app;
pub mod cli;
pub mod error;
pub mod itinerary;
pub mod render;
pub mod storage;

#[cfg(test)]
mod property_tests;

pub use error::{Result, TripError};
pub use itinerary::{build_driving_directions_link, ItineraryStore};
