//! CLI argument structures
//!
//! Day and item positions are zero-based, matching the `[n]` markers printed
//! by `show`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::app::CliOverrides;
use crate::itinerary::{DayField, ItemField, MetaField};
use crate::storage::BackendType;

/// Edit a weekend trip itinerary and track which stops are done
#[derive(Parser, Debug)]
#[command(name = "tripboard")]
#[command(about = "tripboard - Editable weekend itinerary with checklist progress")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base directory for persisted trip data
    #[arg(long, global = true, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Isolated key space inside the storage directory
    #[arg(long, global = true, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Storage backend: file or memory
    #[arg(long, global = true, value_name = "BACKEND")]
    pub backend: Option<BackendType>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Configuration overrides carried by global flags
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            storage_dir: self.storage_dir.clone(),
            namespace: self.namespace.clone(),
            backend: self.backend,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show the itinerary with checklist progress (default command)
    Show {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a stop done, or not done if it already is
    Toggle {
        /// Item id, e.g. fri-land
        id: String,
    },

    /// Change one field of a stop
    #[command(name = "edit-item")]
    EditItem {
        /// Day position
        day: usize,
        /// Item position within the day
        item: usize,
        /// time, title, description or locationQuery
        field: ItemField,
        /// New text
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Change the day or date label of a day
    #[command(name = "edit-day")]
    EditDay {
        /// Day position
        day: usize,
        /// day or date
        field: DayField,
        /// New text
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Append a new placeholder stop to a day
    Add {
        /// Day position
        day: usize,
    },

    /// Delete a stop
    Remove {
        /// Day position
        day: usize,
        /// Item position within the day
        item: usize,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Discard all edits and progress and restore the built-in trip
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Change the trip title or subtitle
    Meta {
        /// title or subtitle
        field: MetaField,
        /// New text
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print the driving-directions link of a stop
    Link {
        /// Day position
        day: usize,
        /// Item position within the day
        item: usize,
    },

    /// Print a driving-directions link for any destination
    Directions {
        /// Free-text destination
        query: String,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Show { json: false }
    }
}
