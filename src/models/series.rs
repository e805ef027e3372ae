//! Cashflow series for the chart demo
//!
//! Holds the month labels and the parallel income/expense arrays rendered by
//! the bar chart. The series is validated before the terminal is touched so
//! the chart itself never has to handle malformed data.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// One month's bar group in the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// Month label (e.g., "Jan")
    pub label: &'a str,
    /// Income for the month
    pub income: Money,
    /// Expenses for the month
    pub expenses: Money,
}

impl MonthGroup<'_> {
    /// Net cashflow for the month
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Month labels with parallel income and expense arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashflowSeries {
    /// Month labels, one per bar group
    pub months: Vec<String>,

    /// Income per month
    pub income: Vec<Money>,

    /// Expenses per month (stored as positive magnitudes)
    pub expenses: Vec<Money>,
}

impl CashflowSeries {
    /// Create a new series
    pub fn new(months: Vec<String>, income: Vec<Money>, expenses: Vec<Money>) -> Self {
        Self {
            months,
            income,
            expenses,
        }
    }

    /// Number of months in the series
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Check if the series has no months
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Largest value across both arrays, used to scale the chart's y-axis
    pub fn max_value(&self) -> Money {
        self.income
            .iter()
            .chain(self.expenses.iter())
            .copied()
            .max()
            .unwrap_or_default()
    }

    /// Validate the series
    ///
    /// The arrays must be non-empty and the same length as the labels.
    pub fn validate(&self) -> Result<(), SeriesValidationError> {
        if self.months.is_empty() {
            return Err(SeriesValidationError::Empty);
        }

        if self.income.len() != self.months.len() || self.expenses.len() != self.months.len() {
            return Err(SeriesValidationError::LengthMismatch {
                months: self.months.len(),
                income: self.income.len(),
                expenses: self.expenses.len(),
            });
        }

        Ok(())
    }

    /// Iterate the series as one group per month label
    ///
    /// Call `validate` first; out-of-range months are skipped otherwise.
    pub fn groups(&self) -> impl Iterator<Item = MonthGroup<'_>> {
        self.months
            .iter()
            .zip(self.income.iter())
            .zip(self.expenses.iter())
            .map(|((label, income), expenses)| MonthGroup {
                label,
                income: *income,
                expenses: *expenses,
            })
    }
}

/// Validation errors for a cashflow series
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesValidationError {
    Empty,
    LengthMismatch {
        months: usize,
        income: usize,
        expenses: usize,
    },
}

impl fmt::Display for SeriesValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Series has no months"),
            Self::LengthMismatch {
                months,
                income,
                expenses,
            } => write!(
                f,
                "Series arrays differ in length: {} months, {} income, {} expense values",
                months, income, expenses
            ),
        }
    }
}

impl std::error::Error for SeriesValidationError {}
