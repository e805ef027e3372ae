//! Report generation for the drills demo
//!
//! Pure aggregations over the sample lists: the monthly expense breakdown
//! and the savings goal projection.

pub mod monthly;
pub mod savings;

pub use monthly::{MonthlyExpenseReport, MonthlyExpenseRow};
pub use savings::{SavingsMilestone, SavingsPlan};
