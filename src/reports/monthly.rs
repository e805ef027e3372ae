//! Monthly expense report
//!
//! Pairs each month label with its expense amount, computes the running
//! total, and collects the large-expense subset.

use crate::error::{FintroError, FintroResult};
use crate::models::Money;

/// One month's row in the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyExpenseRow {
    /// Month label
    pub month: String,
    /// Expense amount for the month (negative)
    pub amount: Money,
}

/// Monthly expense report
#[derive(Debug, Clone)]
pub struct MonthlyExpenseReport {
    /// One row per month, in input order
    pub rows: Vec<MonthlyExpenseRow>,
    /// Sum of all expense amounts
    pub total: Money,
    /// Threshold used to pick out large expenses
    pub large_threshold: Money,
}

impl MonthlyExpenseReport {
    /// Generate the report from month labels and expense amounts
    ///
    /// The two lists must be the same length. Expenses strictly below
    /// `large_threshold` count as large.
    pub fn generate(
        months: &[String],
        expenses: &[Money],
        large_threshold: Money,
    ) -> FintroResult<Self> {
        if months.len() != expenses.len() {
            return Err(FintroError::Validation(format!(
                "Month labels ({}) and expenses ({}) differ in length",
                months.len(),
                expenses.len()
            )));
        }

        let mut total = Money::zero();
        let mut rows = Vec::with_capacity(months.len());

        for (month, amount) in months.iter().zip(expenses.iter()) {
            total += *amount;
            rows.push(MonthlyExpenseRow {
                month: month.clone(),
                amount: *amount,
            });
        }

        Ok(Self {
            rows,
            total,
            large_threshold,
        })
    }

    /// Rows whose expense is strictly below the large-expense threshold
    pub fn large_expenses(&self) -> Vec<&MonthlyExpenseRow> {
        self.rows
            .iter()
            .filter(|row| row.amount < self.large_threshold)
            .collect()
    }
}
