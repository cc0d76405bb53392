//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `TripError`: shows the user message, plus the cause chain in verbose mode
/// - For other errors: shows the error and its chain in verbose mode, exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::TripError;

    error!("Fatal error: {}", error);

    let exit_code = if let Some(trip_err) = error.downcast_ref::<TripError>() {
        eprintln!("Error: {}", trip_err.user_message());

        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", trip_err.developer_message());
        }

        trip_err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
