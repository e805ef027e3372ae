//! Transaction model
//!
//! Represents a single sample transaction record and the inflow/outflow
//! classification used by the drills demo.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Classification of a transaction amount by sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Negative amount: money leaving the account
    Expense,
    /// Positive amount: money entering the account
    Income,
    /// Exactly zero
    Zero,
}

impl TransactionKind {
    /// Classify an amount by its sign
    pub fn classify(amount: Money) -> Self {
        if amount.is_negative() {
            Self::Expense
        } else if amount.is_positive() {
            Self::Income
        } else {
            Self::Zero
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "Expense"),
            Self::Income => write!(f, "Income"),
            Self::Zero => write!(f, "Null Transaction"),
        }
    }
}

/// A sample transaction record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Money,

    /// Merchant name
    pub merchant: String,

    /// Spending category
    pub category: String,
}

impl Transaction {
    /// Create a new transaction record
    pub fn new(
        date: NaiveDate,
        amount: Money,
        merchant: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            merchant: merchant.into(),
            category: category.into(),
        }
    }

    /// Classify this transaction by the sign of its amount
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::classify(self.amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.merchant,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
    }

    #[test]
    fn test_classify_expense() {
        // The drill literal: -$300
        assert_eq!(
            TransactionKind::classify(Money::from_dollars(-300)),
            TransactionKind::Expense
        );
    }

    #[test]
    fn test_classify_income() {
        assert_eq!(
            TransactionKind::classify(Money::from_cents(1)),
            TransactionKind::Income
        );
    }

    #[test]
    fn test_classify_zero() {
        assert_eq!(TransactionKind::classify(Money::zero()), TransactionKind::Zero);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Zero.to_string(), "Null Transaction");
    }

    #[test]
    fn test_transaction_kind() {
        let txn = Transaction::new(sample_date(), Money::from_dollars(50), "Cumberland Fuel", "Fuel");
        assert_eq!(txn.kind(), TransactionKind::Income);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(sample_date(), Money::from_dollars(-50), "Cumberland Fuel", "Fuel");
        assert_eq!(format!("{}", txn), "2026-04-01 Cumberland Fuel -$50.00");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(sample_date(), Money::from_dollars(50), "Cumberland Fuel", "Fuel");
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.date, deserialized.date);
        assert_eq!(txn.amount, deserialized.amount);
        assert_eq!(txn.merchant, deserialized.merchant);
    }
}
