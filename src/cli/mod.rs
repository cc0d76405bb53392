//! CLI command handlers
//!
//! This module contains all CLI-related functionality:
//! - Argument parsing structures
//! - Routing of commands to store operations
//! - Confirmation prompts for destructive commands

pub mod args;
pub mod router;

pub use args::{Cli, Commands};
pub use router::{execute_command, prompt_confirm};
