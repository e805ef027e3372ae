//! CLI handler for the snapshot demo
//!
//! Prints the hard-coded account snapshot: balances, labels, rates, the
//! April expense list, and the sample transaction record.

use tracing::debug;

use crate::config::Settings;
use crate::display::snapshot::format_snapshot;
use crate::error::FintroResult;
use crate::samples;

/// Run the snapshot demo
pub fn handle_snapshot_command(settings: &Settings) -> FintroResult<()> {
    let accounts = samples::sample_accounts();
    debug!(accounts = accounts.len(), "rendering account snapshot");

    let output = format_snapshot(
        &accounts,
        &samples::snapshot_labels(),
        &samples::rate_card(),
        &samples::april_expenses(),
        &samples::fuel_transaction(),
        settings,
    );

    print!("{}", output);
    Ok(())
}
