//! Snapshot display formatting
//!
//! Formats the snapshot demo's account balances, labels, rates, and the
//! sample transaction record for terminal output.

use crate::config::Settings;
use crate::models::{Account, AccountKind, Money, Transaction};
use crate::samples::{RateCard, SnapshotLabels};

/// Format the account balance lines and the total-cash line
///
/// Total cash covers the checking and savings balances; the credit card
/// carries debt and stays out of the total.
pub fn format_balances(accounts: &[Account], settings: &Settings) -> String {
    let sym = settings.currency_symbol.as_str();
    let mut output = String::new();
    let mut total_cash = Money::zero();

    for account in accounts {
        output.push_str(&format!(
            "{} Balance: {}\n",
            account.kind,
            account.balance.format_with_symbol(sym)
        ));

        if !account.kind.is_liability() {
            total_cash += account.balance;
        }
    }

    output.push_str(&format!(
        "Total Cash: {}\n",
        total_cash.format_with_symbol(sym)
    ));

    output
}

/// Format the descriptive labels and boolean flags
pub fn format_labels(labels: &SnapshotLabels, account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Bank:                 {}\n", labels.bank));
    output.push_str(&format!("Account Type:         {}\n", labels.account_type));
    output.push_str(&format!("Last Transaction:     {}\n", labels.last_transaction));
    output.push_str(&format!(
        "Account Active:       {}\n",
        if account.active { "Yes" } else { "No" }
    ));
    output.push_str(&format!(
        "Overdraft Protection: {}\n",
        if account.overdraft_protection { "Yes" } else { "No" }
    ));

    output
}

/// Format the price and rate literals
pub fn format_rates(rates: &RateCard, settings: &Settings) -> String {
    let sym = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Prices & Rates\n");
    output.push_str(&format!(
        "  Bananas (each): {}\n",
        rates.banana_price.format_with_symbol(sym)
    ));
    output.push_str(&format!(
        "  Daily Pay:      {}\n",
        rates.daily_pay.format_with_symbol(sym)
    ));
    output.push_str(&format!("  Savings APR:    {:.2}%\n", rates.savings_apr));

    output
}

/// Format the April expense list on one line
pub fn format_expense_list(expenses: &[Money], settings: &Settings) -> String {
    let sym = settings.currency_symbol.as_str();
    let amounts: Vec<String> = expenses
        .iter()
        .map(|amount| amount.format_with_symbol(sym))
        .collect();

    format!("April Expenses: {}\n", amounts.join(", "))
}

/// Format the sample transaction record as a detail block
pub fn format_transaction_record(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Transaction Record\n");
    output.push_str(&format!("  Date:     {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "  Amount:   {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("  Merchant: {}\n", txn.merchant));
    output.push_str(&format!("  Category: {}\n", txn.category));

    output
}

/// Assemble the full snapshot output
pub fn format_snapshot(
    accounts: &[Account],
    labels: &SnapshotLabels,
    rates: &RateCard,
    april: &[Money],
    txn: &Transaction,
    settings: &Settings,
) -> String {
    let checking = accounts
        .iter()
        .find(|a| a.kind == AccountKind::Checking)
        .cloned()
        .unwrap_or_else(|| Account::new("Checking", AccountKind::Checking, Money::zero()));

    let mut output = format_balances(accounts, settings);
    output.push('\n');
    output.push_str(&format_labels(labels, &checking));
    output.push('\n');
    output.push_str(&format_rates(rates, settings));
    output.push('\n');
    output.push_str(&format_expense_list(april, settings));
    output.push('\n');
    output.push_str(&format_transaction_record(txn, settings));

    output
}
