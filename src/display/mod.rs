//! Display formatting
//!
//! Formats the demos' console output. Everything here returns a String so
//! output can be asserted in tests before it reaches stdout.

pub mod report;
pub mod snapshot;
