//! Terminal rendering of a trip snapshot
//!
//! Pure functions of a [`TripView`]; nothing here touches storage.

use std::fmt::Write;

use crate::itinerary::{build_driving_directions_link, DaySchedule, ItineraryItem, TripView};

pub const MODE_BADGE: &str = "🚗 Car Rental Mode";
pub const FOOTER: &str = "Progress saved automatically.";

/// Render the full trip as plain text
pub fn render_trip(view: &TripView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.meta.title);
    let _ = writeln!(out, "{}", view.meta.subtitle);
    let _ = writeln!(out, "{}", MODE_BADGE);
    let _ = writeln!(out, "{}", view.progress);

    for (day_index, day) in view.itinerary.iter().enumerate() {
        out.push('\n');
        render_day(&mut out, view, day_index, day);
    }

    out.push('\n');
    let _ = writeln!(out, "{}", FOOTER);
    out
}

fn render_day(out: &mut String, view: &TripView<'_>, day_index: usize, day: &DaySchedule) {
    let _ = writeln!(out, "== [{}] {} · {} ==", day_index, day.day, day.date);
    if day.items.is_empty() {
        let _ = writeln!(out, "  (no stops)");
    }
    for (item_index, item) in day.items.iter().enumerate() {
        render_item(out, item_index, item, view.checklist.is_done(&item.id));
    }
}

fn render_item(out: &mut String, item_index: usize, item: &ItineraryItem, done: bool) {
    let check = if done { "[x]" } else { "[ ]" };
    let title = if done {
        format!("~~{}~~", item.title)
    } else {
        item.title.clone()
    };
    let _ = writeln!(
        out,
        "  {} {}. {:<5}  {}  ({})",
        check, item_index, item.time, title, item.id
    );
    if !item.description.is_empty() {
        let _ = writeln!(out, "         {}", item.description);
    }
    let _ = writeln!(
        out,
        "         Navigate: {}",
        build_driving_directions_link(&item.location_query)
    );
}

/// Render the snapshot as pretty-printed JSON
pub fn render_json(view: &TripView<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}
