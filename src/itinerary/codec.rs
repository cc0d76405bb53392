//! Persistence codec for the four independently keyed trip slices
//!
//! Itinerary and checklist are stored as JSON text. Title and subtitle are
//! stored as raw strings with no wrapping. No schema version is written.

use thiserror::Error;

use super::model::{ChecklistProgress, DaySchedule, Itinerary};
use crate::storage::{StorageError, StorageResult};

pub const PROGRESS_KEY: &str = "warsawTripProgress";
pub const ITINERARY_KEY: &str = "warsawTripItinerary";
pub const TITLE_KEY: &str = "warsawTripTitle";
pub const SUBTITLE_KEY: &str = "warsawTripSubtitle";

/// Every key the store ever writes
pub const ALL_KEYS: [&str; 4] = [PROGRESS_KEY, ITINERARY_KEY, TITLE_KEY, SUBTITLE_KEY];

/// Persisted text that does not have the expected shape
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("stored itinerary is not a valid day list: {0}")]
    Itinerary(#[source] serde_json::Error),

    #[error("stored checklist is not a valid id-to-flag map: {0}")]
    Checklist(#[source] serde_json::Error),
}

pub fn encode_itinerary(itinerary: &[DaySchedule]) -> StorageResult<String> {
    serde_json::to_string(itinerary).map_err(StorageError::serialization)
}

pub fn decode_itinerary(raw: &str) -> Result<Itinerary, DecodeError> {
    serde_json::from_str(raw).map_err(DecodeError::Itinerary)
}

pub fn encode_checklist(checklist: &ChecklistProgress) -> StorageResult<String> {
    serde_json::to_string(checklist).map_err(StorageError::serialization)
}

pub fn decode_checklist(raw: &str) -> Result<ChecklistProgress, DecodeError> {
    serde_json::from_str(raw).map_err(DecodeError::Checklist)
}
