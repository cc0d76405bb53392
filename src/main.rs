use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tracing::debug;

use tripboard::app::{handle_fatal_error, init_logging, AppConfig};
use tripboard::cli::{execute_command, prompt_confirm, Cli};
use tripboard::itinerary::ItineraryStore;
use tripboard::storage::{KeyValueStore, StorageFactory};
use tripboard::TripError;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.verbose, &cli.overrides()) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), cli.verbose),
    };
    init_logging(&config);

    if let Err(e) = run(cli, &config) {
        handle_fatal_error(e, config.verbose);
    }
}

fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let storage = StorageFactory::from_config(&config.storage).map_err(TripError::from)?;
    debug!(
        "Using {} storage at {}",
        storage.backend_name(),
        config.storage.namespace_dir().display()
    );

    let mut store = ItineraryStore::new(storage);
    let report = store.initialize();
    if !report.is_clean() {
        debug!("Loaded trip with fallbacks: {:?}", report);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut confirm = |message: &str| {
        let mut prompt_out = io::stderr();
        prompt_confirm(&mut stdin.lock(), &mut prompt_out, message)
    };

    let mut out = stdout.lock();
    execute_command(cli.command.unwrap_or_default(), &mut store, &mut out, &mut confirm)?;
    out.flush()?;
    Ok(())
}
