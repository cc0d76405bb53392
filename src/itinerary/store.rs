//! Itinerary store: canonical trip state and its write-back to storage
//!
//! The store starts from seed data with write-back disarmed. `initialize`
//! rehydrates each slice independently from the key-value surface and then
//! arms write-back. Every mutation afterwards persists exactly the slice it
//! changed. Storage write failures are logged and otherwise ignored.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::codec::{
    decode_checklist, decode_itinerary, encode_checklist, encode_itinerary, DecodeError,
    ALL_KEYS, ITINERARY_KEY, PROGRESS_KEY, SUBTITLE_KEY, TITLE_KEY,
};
use super::model::{
    ChecklistProgress, DayField, DaySchedule, ItemField, Itinerary, ItineraryItem, MetaField,
    Progress, TripMeta,
};
use super::seed::Seed;
use crate::error::{Result, TripError};
use crate::storage::{KeyValueStore, StorageResult};

/// Prefix carried by every id the store generates
pub const GENERATED_ID_PREFIX: &str = "custom-";

pub const PLACEHOLDER_TIME: &str = "12:00";
pub const PLACEHOLDER_TITLE: &str = "New Activity";
pub const PLACEHOLDER_DESCRIPTION: &str = "Description here...";

/// What happened to one slice during `initialize`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceLoad {
    /// Persisted value decoded and applied
    Loaded,
    /// Nothing stored under the key
    Missing,
    /// Stored value did not decode; in-memory value kept
    Corrupt(String),
    /// The storage read itself failed; in-memory value kept
    Unreadable(String),
}

impl SliceLoad {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SliceLoad::Loaded)
    }
}

/// Per-slice outcome of `initialize`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub itinerary: SliceLoad,
    pub checklist: SliceLoad,
    pub title: SliceLoad,
    pub subtitle: SliceLoad,
}

impl InitReport {
    /// True when no slice fell back because of bad or unreadable data
    pub fn is_clean(&self) -> bool {
        [&self.itinerary, &self.checklist, &self.title, &self.subtitle]
            .iter()
            .all(|s| matches!(s, SliceLoad::Loaded | SliceLoad::Missing))
    }
}

/// Read-only snapshot handed to the presentation layer
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TripView<'a> {
    pub meta: &'a TripMeta,
    pub itinerary: &'a [DaySchedule],
    pub checklist: &'a ChecklistProgress,
    pub progress: Progress,
}

/// Generates ids that never repeat within a session
#[derive(Debug, Default)]
struct IdGenerator {
    seq: u64,
}

impl IdGenerator {
    fn next(&mut self, mut taken: impl FnMut(&str) -> bool) -> String {
        loop {
            self.seq += 1;
            let id = format!(
                "{}{}-{}",
                GENERATED_ID_PREFIX,
                Utc::now().timestamp_millis(),
                self.seq
            );
            if !taken(&id) {
                return id;
            }
        }
    }
}

/// Owner of trip state, synchronized with a key-value surface
pub struct ItineraryStore<S: KeyValueStore> {
    storage: S,
    seed: Seed,
    itinerary: Itinerary,
    checklist: ChecklistProgress,
    meta: TripMeta,
    ready: bool,
    ids: IdGenerator,
}

impl<S: KeyValueStore> ItineraryStore<S> {
    /// Create a store over `storage` holding the Warsaw seed data
    pub fn new(storage: S) -> Self {
        Self::with_seed(storage, Seed::warsaw())
    }

    /// Create a store with custom defaults
    pub fn with_seed(storage: S, seed: Seed) -> Self {
        Self {
            storage,
            itinerary: seed.itinerary.clone(),
            meta: seed.meta.clone(),
            seed,
            checklist: ChecklistProgress::new(),
            ready: false,
            ids: IdGenerator::default(),
        }
    }

    /// Rehydrate from storage, then arm write-back.
    ///
    /// Each slice is loaded independently. A slice that is missing, corrupt or
    /// unreadable keeps its in-memory value. Never fails.
    pub fn initialize(&mut self) -> InitReport {
        let itinerary = match self.read(ITINERARY_KEY) {
            Ok(Some(raw)) => match decode_itinerary(&raw) {
                Ok(itinerary) => {
                    self.itinerary = itinerary;
                    SliceLoad::Loaded
                }
                Err(e) => corrupt(ITINERARY_KEY, e),
            },
            Ok(None) => SliceLoad::Missing,
            Err(e) => unreadable(ITINERARY_KEY, e),
        };

        let checklist = match self.read(PROGRESS_KEY) {
            Ok(Some(raw)) => match decode_checklist(&raw) {
                Ok(checklist) => {
                    self.checklist = checklist;
                    SliceLoad::Loaded
                }
                Err(e) => corrupt(PROGRESS_KEY, e),
            },
            Ok(None) => SliceLoad::Missing,
            Err(e) => unreadable(PROGRESS_KEY, e),
        };

        let title = self.load_meta_field(MetaField::Title);
        let subtitle = self.load_meta_field(MetaField::Subtitle);

        if !self.ready {
            debug!("Itinerary store ready on {} backend", self.storage.backend_name());
        }
        self.ready = true;

        InitReport {
            itinerary,
            checklist,
            title,
            subtitle,
        }
    }

    fn load_meta_field(&mut self, field: MetaField) -> SliceLoad {
        let key = meta_key(field);
        match self.read(key) {
            Ok(Some(raw)) => {
                self.meta.set_field(field, raw);
                SliceLoad::Loaded
            }
            Ok(None) => SliceLoad::Missing,
            Err(e) => unreadable(key, e),
        }
    }

    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage.get(key)
    }

    /// Whether `initialize` has completed and write-back is armed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn itinerary(&self) -> &[DaySchedule] {
        &self.itinerary
    }

    pub fn checklist(&self) -> &ChecklistProgress {
        &self.checklist
    }

    pub fn meta(&self) -> &TripMeta {
        &self.meta
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.itinerary, &self.checklist)
    }

    pub fn view(&self) -> TripView<'_> {
        TripView {
            meta: &self.meta,
            itinerary: &self.itinerary,
            checklist: &self.checklist,
            progress: self.progress(),
        }
    }

    /// Look up one item by position
    pub fn item(&self, day_index: usize, item_index: usize) -> Result<&ItineraryItem> {
        let day = self.day(day_index)?;
        day.items
            .get(item_index)
            .ok_or_else(|| TripError::index_out_of_range("item", item_index, day.items.len()))
    }

    fn day(&self, day_index: usize) -> Result<&DaySchedule> {
        self.itinerary
            .get(day_index)
            .ok_or_else(|| TripError::index_out_of_range("day", day_index, self.itinerary.len()))
    }

    fn day_mut(&mut self, day_index: usize) -> Result<&mut DaySchedule> {
        let len = self.itinerary.len();
        self.itinerary
            .get_mut(day_index)
            .ok_or_else(|| TripError::index_out_of_range("day", day_index, len))
    }

    fn item_mut(&mut self, day_index: usize, item_index: usize) -> Result<&mut ItineraryItem> {
        let day = self.day_mut(day_index)?;
        let len = day.items.len();
        day.items
            .get_mut(item_index)
            .ok_or_else(|| TripError::index_out_of_range("item", item_index, len))
    }

    /// Flip the done flag of `id` and return its new value
    pub fn toggle_checklist(&mut self, id: &str) -> bool {
        let done = self.checklist.toggle(id);
        debug!("Checklist entry {} is now {}", id, done);
        self.persist_checklist();
        done
    }

    /// Replace one text field of one item
    pub fn update_item_field(
        &mut self,
        day_index: usize,
        item_index: usize,
        field: ItemField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.item_mut(day_index, item_index)?
            .set_field(field, value.into());
        self.persist_itinerary();
        Ok(())
    }

    /// Replace the `day` or `date` label of one day
    pub fn update_day_header(
        &mut self,
        day_index: usize,
        field: DayField,
        value: impl Into<String>,
    ) -> Result<()> {
        self.day_mut(day_index)?.set_header(field, value.into());
        self.persist_itinerary();
        Ok(())
    }

    /// Append a placeholder item to a day and return its fresh id
    pub fn add_item(&mut self, day_index: usize) -> Result<String> {
        self.day(day_index)?;

        let itinerary = &self.itinerary;
        let id = self.ids.next(|candidate| {
            itinerary
                .iter()
                .flat_map(|d| d.items.iter())
                .any(|item| item.id == candidate)
        });

        self.day_mut(day_index)?.items.push(ItineraryItem::new(
            id.clone(),
            PLACEHOLDER_TIME,
            PLACEHOLDER_TITLE,
            PLACEHOLDER_DESCRIPTION,
            "",
        ));
        debug!("Added item {} to day {}", id, day_index);
        self.persist_itinerary();
        Ok(id)
    }

    /// Remove an item; later items move up one position.
    ///
    /// Callers are expected to have confirmed with the user already.
    pub fn remove_item(&mut self, day_index: usize, item_index: usize) -> Result<ItineraryItem> {
        let day = self.day_mut(day_index)?;
        if item_index >= day.items.len() {
            return Err(TripError::index_out_of_range(
                "item",
                item_index,
                day.items.len(),
            ));
        }
        let removed = day.items.remove(item_index);
        debug!("Removed item {} from day {}", removed.id, day_index);
        self.persist_itinerary();
        Ok(removed)
    }

    /// Set the trip title or subtitle
    pub fn update_meta(&mut self, field: MetaField, value: impl Into<String>) {
        self.meta.set_field(field, value.into());
        self.persist_meta_field(field);
    }

    /// Restore seed data and delete every trip key from storage.
    ///
    /// Callers are expected to have confirmed with the user already. Key
    /// removal happens even before `initialize`.
    pub fn reset_to_defaults(&mut self) {
        self.itinerary = self.seed.itinerary.clone();
        self.meta = self.seed.meta.clone();
        self.checklist = ChecklistProgress::new();

        for key in ALL_KEYS {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to remove {} during reset: {}", key, e);
            }
        }
        info!("Trip reset to defaults");
    }

    fn persist_itinerary(&self) {
        if !self.ready {
            debug!("Skipping itinerary write-back before initialize");
            return;
        }
        match encode_itinerary(&self.itinerary) {
            Ok(raw) => self.write(ITINERARY_KEY, &raw),
            Err(e) => warn!("Failed to encode itinerary: {}", e),
        }
    }

    fn persist_checklist(&self) {
        if !self.ready {
            debug!("Skipping checklist write-back before initialize");
            return;
        }
        match encode_checklist(&self.checklist) {
            Ok(raw) => self.write(PROGRESS_KEY, &raw),
            Err(e) => warn!("Failed to encode checklist: {}", e),
        }
    }

    fn persist_meta_field(&self, field: MetaField) {
        if !self.ready {
            debug!("Skipping {} write-back before initialize", field);
            return;
        }
        self.write(meta_key(field), self.meta.field(field));
    }

    fn write(&self, key: &str, value: &str) {
        match self.storage.set(key, value) {
            Ok(()) => debug!("Persisted {} ({} bytes)", key, value.len()),
            Err(e) => warn!("Failed to persist {}: {}", key, e),
        }
    }
}

fn meta_key(field: MetaField) -> &'static str {
    match field {
        MetaField::Title => TITLE_KEY,
        MetaField::Subtitle => SUBTITLE_KEY,
    }
}

fn corrupt(key: &str, err: DecodeError) -> SliceLoad {
    warn!("Ignoring stored {}: {}", key, err);
    SliceLoad::Corrupt(err.to_string())
}

fn unreadable(key: &str, err: crate::storage::StorageError) -> SliceLoad {
    warn!("Could not read {}: {}", key, err);
    SliceLoad::Unreadable(err.to_string())
}
