//! Trip data model: items, days, checklist progress and metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One timed stop on the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    /// Stable identity, never edited after creation
    pub id: String,
    /// Free-form display time, e.g. "15:20"
    pub time: String,
    pub title: String,
    pub description: String,
    /// Passed verbatim to the maps service as the destination
    pub location_query: String,
}

impl ItineraryItem {
    pub fn new(
        id: impl Into<String>,
        time: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        location_query: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time: time.into(),
            title: title.into(),
            description: description.into(),
            location_query: location_query.into(),
        }
    }

    /// Read one editable field
    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Time => &self.time,
            ItemField::Title => &self.title,
            ItemField::Description => &self.description,
            ItemField::LocationQuery => &self.location_query,
        }
    }

    /// Replace one editable field
    pub fn set_field(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Time => self.time = value,
            ItemField::Title => self.title = value,
            ItemField::Description => self.description = value,
            ItemField::LocationQuery => self.location_query = value,
        }
    }
}

/// A labelled day and its ordered stops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: String,
    pub date: String,
    pub items: Vec<ItineraryItem>,
}

impl DaySchedule {
    pub fn new(day: impl Into<String>, date: impl Into<String>, items: Vec<ItineraryItem>) -> Self {
        Self {
            day: day.into(),
            date: date.into(),
            items,
        }
    }

    pub fn set_header(&mut self, field: DayField, value: String) {
        match field {
            DayField::Day => self.day = value,
            DayField::Date => self.date = value,
        }
    }
}

/// The whole trip, days in display order
pub type Itinerary = Vec<DaySchedule>;

/// Per-stop completion flags keyed by item id.
///
/// A missing entry reads as not done. Entries for ids that no longer exist are
/// kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistProgress(BTreeMap<String, bool>);

impl ChecklistProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id` and return the new value
    pub fn toggle(&mut self, id: &str) -> bool {
        let entry = self.0.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Whether an entry exists at all, regardless of its value
    pub fn has_entry(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ChecklistProgress {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Trip heading shown above the itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripMeta {
    pub title: String,
    pub subtitle: String,
}

impl TripMeta {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    pub fn field(&self, field: MetaField) -> &str {
        match field {
            MetaField::Title => &self.title,
            MetaField::Subtitle => &self.subtitle,
        }
    }

    pub fn set_field(&mut self, field: MetaField, value: String) {
        match field {
            MetaField::Title => self.title = value,
            MetaField::Subtitle => self.subtitle = value,
        }
    }
}

/// Completed stops out of all stops currently on the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// Count done flags that belong to existing items; orphans are ignored
    pub fn of(itinerary: &[DaySchedule], checklist: &ChecklistProgress) -> Self {
        let (done, total) = itinerary
            .iter()
            .flat_map(|day| day.items.iter())
            .fold((0, 0), |(done, total), item| {
                (done + usize::from(checklist.is_done(&item.id)), total + 1)
            });
        Self { done, total }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} stops done", self.done, self.total)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} field '{value}' (expected one of: {expected})")]
pub struct UnknownField {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Editable text fields of an item; `id` is not one of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Time,
    Title,
    Description,
    LocationQuery,
}

impl ItemField {
    pub const ALL: [ItemField; 4] = [
        ItemField::Time,
        ItemField::Title,
        ItemField::Description,
        ItemField::LocationQuery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Time => "time",
            ItemField::Title => "title",
            ItemField::Description => "description",
            ItemField::LocationQuery => "locationQuery",
        }
    }
}

impl FromStr for ItemField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "time" => Ok(Self::Time),
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "locationQuery" | "location-query" | "location" => Ok(Self::LocationQuery),
            other => Err(UnknownField {
                kind: "item",
                value: other.to_string(),
                expected: "time, title, description, locationQuery",
            }),
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header labels of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayField {
    Day,
    Date,
}

impl FromStr for DayField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "date" => Ok(Self::Date),
            other => Err(UnknownField {
                kind: "day",
                value: other.to_string(),
                expected: "day, date",
            }),
        }
    }
}

impl fmt::Display for DayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DayField::Day => "day",
            DayField::Date => "date",
        })
    }
}

/// Trip heading fields, each persisted under its own key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    Title,
    Subtitle,
}

impl FromStr for MetaField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "subtitle" => Ok(Self::Subtitle),
            other => Err(UnknownField {
                kind: "meta",
                value: other.to_string(),
                expected: "title, subtitle",
            }),
        }
    }
}

impl fmt::Display for MetaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MetaField::Title => "title",
            MetaField::Subtitle => "subtitle",
        })
    }
}
