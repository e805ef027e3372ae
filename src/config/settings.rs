//! User settings for fintro
//!
//! A small read-only configuration surface: display preferences and the
//! thresholds used by the drills. Settings load from an optional JSON file
//! and fall back to defaults that mirror the sample data.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::paths::FintroPaths;
use crate::error::FintroError;
use crate::models::Money;

/// User settings for fintro
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used in output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Balances under this (but above zero) trigger the low-balance warning
    #[serde(default = "default_low_balance_threshold")]
    pub low_balance_threshold: Money,

    /// Expenses strictly below this count as large
    #[serde(default = "default_large_expense_threshold")]
    pub large_expense_threshold: Money,

    /// Chart event-loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_low_balance_threshold() -> Money {
    Money::from_dollars(500)
}

fn default_large_expense_threshold() -> Money {
    Money::from_dollars(-100)
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            low_balance_threshold: default_low_balance_threshold(),
            large_expense_threshold: default_large_expense_threshold(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, or use defaults if no file exists
    pub fn load_or_default(paths: &FintroPaths) -> Result<Self, FintroError> {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from a specific file, or use defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, FintroError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| FintroError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| FintroError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintroPaths) -> Result<(), FintroError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintroError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FintroError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
