//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library.

pub mod drills;
pub mod snapshot;

pub use drills::{handle_drills_command, DrillsArgs};
pub use snapshot::handle_snapshot_command;
