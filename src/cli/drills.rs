//! CLI handler for the control-flow drills
//!
//! Runs the classification checks and loop aggregations over the sample
//! lists: account standing, transaction classification, monthly expenses,
//! large-expense filter, and the savings goal projection.

use clap::Args;
use tracing::debug;

use crate::config::Settings;
use crate::display::report::{
    format_classification, format_monthly_report, format_savings_schedule, format_standing_check,
};
use crate::error::{FintroError, FintroResult};
use crate::models::{standing_for, Money, TransactionKind};
use crate::reports::{MonthlyExpenseReport, SavingsPlan};
use crate::samples;

/// Arguments for the drills demo
///
/// The savings plan literals can be overridden; everything else is fixed
/// sample data.
#[derive(Args, Debug)]
pub struct DrillsArgs {
    /// Savings goal amount (e.g., "5000" or "5000.00")
    #[arg(long)]
    pub goal: Option<String>,

    /// Monthly deposit amount
    #[arg(long)]
    pub deposit: Option<String>,
}

impl DrillsArgs {
    /// Resolve the savings plan from the arguments, falling back to the
    /// sample literals
    pub fn savings_plan(&self) -> FintroResult<SavingsPlan> {
        let goal = parse_amount(self.goal.as_deref(), Money::from_dollars(5000))?;
        let deposit = parse_amount(self.deposit.as_deref(), Money::from_dollars(500))?;
        Ok(SavingsPlan::new(goal, deposit, Money::zero()))
    }
}

fn parse_amount(arg: Option<&str>, default: Money) -> FintroResult<Money> {
    match arg {
        Some(s) => Money::parse(s).map_err(|e| FintroError::Validation(e.to_string())),
        None => Ok(default),
    }
}

/// Run the drills demo
pub fn handle_drills_command(settings: &Settings, args: &DrillsArgs) -> FintroResult<()> {
    // Task 1: account standing
    let balance = samples::standing_check_balance();
    let standing = standing_for(balance, settings.low_balance_threshold);
    print!("{}", format_standing_check(balance, standing, settings));
    println!();

    // Task 2: transaction classification
    let amount = samples::classification_amount();
    let kind = TransactionKind::classify(amount);
    print!("{}", format_classification(amount, kind, settings));
    println!();

    // Tasks 3-5: monthly breakdown, total, large expenses
    let report = MonthlyExpenseReport::generate(
        &samples::month_labels(),
        &samples::monthly_expenses(),
        settings.large_expense_threshold,
    )?;
    debug!(total = report.total.cents(), "monthly report generated");
    print!("{}", format_monthly_report(&report, settings));
    println!();

    // Task 6: savings goal projection
    let plan = args.savings_plan()?;
    let milestones = plan.projection()?;
    print!("{}", format_savings_schedule(&plan, &milestones, settings));

    Ok(())
}
