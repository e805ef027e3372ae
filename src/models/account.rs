//! Account model
//!
//! Represents the sample financial accounts (checking, savings, credit) and
//! the balance-standing classification used by the drills demo.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    Credit,
}

impl AccountKind {
    /// Parse account kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            _ => None,
        }
    }

    /// Returns true if this account normally carries debt
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }
}

impl Default for AccountKind {
    fn default() -> Self {
        Self::Checking
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
        }
    }
}

/// How an account balance classifies against the low-balance threshold
///
/// A balance of exactly zero is neither overdrawn nor low, so it lands in
/// `Healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStanding {
    /// Balance is below zero
    Overdrawn,
    /// Balance is positive but under the threshold
    LowBalance,
    /// Balance is zero or comfortably positive
    Healthy,
}

impl fmt::Display for AccountStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdrawn => write!(f, "Overdrawn!"),
            Self::LowBalance => write!(f, "Low Balance Warning"),
            Self::Healthy => write!(f, "Account Healthy"),
        }
    }
}

/// A sample financial account
///
/// Accounts here are demo literals with no lifecycle: declared, printed,
/// discarded at program exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account name (e.g., "Everyday Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub kind: AccountKind,

    /// Current balance
    pub balance: Money,

    /// Whether the account is open
    pub active: bool,

    /// Whether overdraft protection is enabled
    pub overdraft_protection: bool,
}

impl Account {
    /// Create a new account
    pub fn new(name: impl Into<String>, kind: AccountKind, balance: Money) -> Self {
        Self {
            name: name.into(),
            kind,
            balance,
            active: true,
            overdraft_protection: false,
        }
    }

    /// Classify the balance against a low-balance threshold
    pub fn standing(&self, threshold: Money) -> AccountStanding {
        standing_for(self.balance, threshold)
    }
}

/// Classify a balance against a low-balance threshold
pub fn standing_for(balance: Money, threshold: Money) -> AccountStanding {
    if balance.is_negative() {
        AccountStanding::Overdrawn
    } else if balance.is_positive() && balance < threshold {
        AccountStanding::LowBalance
    } else {
        AccountStanding::Healthy
    }
}
