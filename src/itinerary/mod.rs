//! Trip itinerary state model
//!
//! - `model` - items, days, checklist progress and trip metadata
//! - `seed` - the built-in trip used as default and reset target
//! - `codec` - storage keys and the text encoding of each slice
//! - `store` - the stateful store that mutates and persists the trip
//! - `links` - driving-directions deep links

pub mod codec;
pub mod links;
pub mod model;
pub mod seed;
pub mod store;

pub use codec::{DecodeError, ALL_KEYS, ITINERARY_KEY, PROGRESS_KEY, SUBTITLE_KEY, TITLE_KEY};
pub use links::build_driving_directions_link;
pub use model::{
    ChecklistProgress, DayField, DaySchedule, ItemField, Itinerary, ItineraryItem, MetaField,
    Progress, TripMeta,
};
pub use seed::Seed;
pub use store::{InitReport, ItineraryStore, SliceLoad, TripView};
