//! Command routing and execution
//!
//! Routes a parsed command to the matching store operation and writes the
//! user-facing result to `out`. Destructive commands ask `confirm` first unless
//! `--yes` was given; a declined prompt leaves the store untouched.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::args::Commands;
use crate::itinerary::{build_driving_directions_link, ItineraryStore};
use crate::render::{render_json, render_trip};
use crate::storage::KeyValueStore;

/// Execute a CLI command against an initialized store
pub fn execute_command<S, W, C>(
    command: Commands,
    store: &mut ItineraryStore<S>,
    out: &mut W,
    confirm: &mut C,
) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
    C: FnMut(&str) -> Result<bool>,
{
    match command {
        Commands::Show { json } => {
            let view = store.view();
            if json {
                writeln!(out, "{}", render_json(&view)?)?;
            } else {
                write!(out, "{}", render_trip(&view))?;
            }
        }
        Commands::Toggle { id } => {
            let done = store.toggle_checklist(&id);
            let state = if done { "done" } else { "not done" };
            writeln!(out, "{id}: {state}")?;
        }
        Commands::EditItem {
            day,
            item,
            field,
            value,
        } => {
            store.update_item_field(day, item, field, value)?;
            writeln!(out, "Updated {field} of item {item} on day {day}")?;
        }
        Commands::EditDay { day, field, value } => {
            store.update_day_header(day, field, value)?;
            writeln!(out, "Updated {field} of day {day}")?;
        }
        Commands::Add { day } => {
            let id = store.add_item(day)?;
            writeln!(out, "{id}")?;
        }
        Commands::Remove { day, item, yes } => {
            let target = store.item(day, item)?;
            let prompt = format!(
                "Remove '{}' from {}?",
                target.title,
                store.itinerary()[day].day
            );
            if !yes && !confirm(&prompt)? {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
            let removed = store.remove_item(day, item)?;
            writeln!(out, "Removed {}", removed.id)?;
        }
        Commands::Reset { yes } => {
            let prompt = "Reset the trip to its defaults? All edits and progress will be lost.";
            if !yes && !confirm(prompt)? {
                writeln!(out, "Cancelled.")?;
                return Ok(());
            }
            store.reset_to_defaults();
            writeln!(out, "Trip reset to defaults")?;
        }
        Commands::Meta { field, value } => {
            store.update_meta(field, value);
            writeln!(out, "Updated {field}")?;
        }
        Commands::Link { day, item } => {
            let target = store.item(day, item)?;
            writeln!(out, "{}", build_driving_directions_link(&target.location_query))?;
        }
        Commands::Directions { query } => {
            writeln!(out, "{}", build_driving_directions_link(&query))?;
        }
    }

    Ok(())
}

/// Ask a yes/no question; only `y` or `yes` counts as consent
pub fn prompt_confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<bool> {
    write!(out, "{message} [y/N] ")?;
    out.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read user input")?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
