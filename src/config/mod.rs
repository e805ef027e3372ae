//! Configuration module for fintro
//!
//! This module provides configuration management including:
//! - Platform path resolution for the settings file
//! - User settings with sample-data defaults

pub mod paths;
pub mod settings;

pub use paths::FintroPaths;
pub use settings::Settings;
