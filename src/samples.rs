//! Hard-coded sample datasets
//!
//! All demo data lives here: the snapshot literals, the drill lists, and the
//! chart series. Everything is declared, used once, and discarded at exit;
//! nothing is persisted.

use chrono::NaiveDate;

use crate::models::{Account, AccountKind, CashflowSeries, Money, Transaction};

/// Price and rate literals shown by the snapshot demo
#[derive(Debug, Clone)]
pub struct RateCard {
    /// Unit price of bananas at the sample grocer
    pub banana_price: Money,
    /// Pay for one day of work
    pub daily_pay: Money,
    /// Savings account APR, as a percentage
    pub savings_apr: f64,
}

/// Descriptive strings shown by the snapshot demo
#[derive(Debug, Clone)]
pub struct SnapshotLabels {
    /// Bank name
    pub bank: String,
    /// Account type label
    pub account_type: String,
    /// Description of the most recent transaction
    pub last_transaction: String,
}

/// The three sample accounts: checking, savings, credit
pub fn sample_accounts() -> Vec<Account> {
    vec![
        Account::new(
            "Everyday Checking",
            AccountKind::Checking,
            Money::from_dollars(1500),
        ),
        Account::new(
            "Rainy Day Savings",
            AccountKind::Savings,
            Money::from_dollars(5000),
        ),
        Account::new("Rewards Card", AccountKind::Credit, Money::from_dollars(-200)),
    ]
}

/// Price and rate literals
pub fn rate_card() -> RateCard {
    RateCard {
        banana_price: Money::from_cents(193),
        daily_pay: Money::from_cents(15201),
        savings_apr: 2.01,
    }
}

/// Descriptive string literals
pub fn snapshot_labels() -> SnapshotLabels {
    SnapshotLabels {
        bank: "Harborview Bank".into(),
        account_type: "Checking".into(),
        last_transaction: "Groceries".into(),
    }
}

/// April's expense amounts, in order
pub fn april_expenses() -> Vec<Money> {
    [100, 30, 40, 50, 23, 24]
        .into_iter()
        .map(Money::from_dollars)
        .collect()
}

/// The fuel purchase record; its amount is the fourth April expense
pub fn fuel_transaction() -> Transaction {
    let amount = april_expenses()[3];
    Transaction::new(
        NaiveDate::from_ymd_opt(2026, 4, 1).expect("valid sample date"),
        amount,
        "Cumberland Fuel",
        "Fuel",
    )
}

/// Balance literal for the standing-check drill
pub fn standing_check_balance() -> Money {
    Money::from_dollars(300)
}

/// Amount literal for the classification drill
pub fn classification_amount() -> Money {
    Money::from_dollars(-300)
}

/// Month labels for the drill expenses and the chart series
pub fn month_labels() -> Vec<String> {
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Monthly expense amounts for the drills, one per month label
pub fn monthly_expenses() -> Vec<Money> {
    [-10, -200, -300, -400, -80, -200]
        .into_iter()
        .map(Money::from_dollars)
        .collect()
}

/// The income-vs-expenses series rendered by the chart demo
pub fn cashflow_series() -> CashflowSeries {
    CashflowSeries::new(
        month_labels(),
        [3000, 3200, 3100, 3300, 3400, 3500]
            .into_iter()
            .map(Money::from_dollars)
            .collect(),
        [2000, 2100, 1900, 2200, 2300, 2100]
            .into_iter()
            .map(Money::from_dollars)
            .collect(),
    )
}
