//! Core data models for fintro
//!
//! This module contains the data structures shared by the demos: money,
//! accounts, transactions, and the cashflow series behind the chart view.

pub mod account;
pub mod money;
pub mod series;
pub mod transaction;

pub use account::{standing_for, Account, AccountKind, AccountStanding};
pub use money::Money;
pub use series::{CashflowSeries, MonthGroup, SeriesValidationError};
pub use transaction::{Transaction, TransactionKind};
