//! Drill report formatting
//!
//! Formats the control-flow demo's classification lines, the monthly expense
//! breakdown, and the savings projection schedule.

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::{AccountStanding, Money, TransactionKind};
use crate::reports::{MonthlyExpenseReport, SavingsMilestone, SavingsPlan};

/// Format the account-standing check
pub fn format_standing_check(
    balance: Money,
    standing: AccountStanding,
    settings: &Settings,
) -> String {
    format!(
        "Account Status Check\n  Balance {}: {}\n",
        balance.format_with_symbol(&settings.currency_symbol),
        standing
    )
}

/// Format the transaction classification check
pub fn format_classification(amount: Money, kind: TransactionKind, settings: &Settings) -> String {
    format!(
        "Transaction Classifier\n  Amount {}: {}\n",
        amount.format_with_symbol(&settings.currency_symbol),
        kind
    )
}

/// Format the monthly breakdown, total, and large-expense subset
pub fn format_monthly_report(report: &MonthlyExpenseReport, settings: &Settings) -> String {
    let sym = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Monthly Expenses\n");
    for row in &report.rows {
        output.push_str(&format!(
            "  {}: {}\n",
            row.month,
            row.amount.format_with_symbol(sym)
        ));
    }
    output.push_str(&format!(
        "  Total: {}\n",
        report.total.format_with_symbol(sym)
    ));

    output.push('\n');
    output.push_str(&format!(
        "Large Expenses (below {})\n",
        report.large_threshold.format_with_symbol(sym)
    ));

    let large = report.large_expenses();
    if large.is_empty() {
        output.push_str("  None\n");
    } else {
        for row in large {
            output.push_str(&format!(
                "  {}: {}\n",
                row.month,
                row.amount.format_with_symbol(sym)
            ));
        }
    }

    output
}

/// Row shape for the savings schedule table
#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Month")]
    month: u32,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format the savings projection as a schedule table plus a summary line
pub fn format_savings_schedule(
    plan: &SavingsPlan,
    milestones: &[SavingsMilestone],
    settings: &Settings,
) -> String {
    let sym = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Savings Goal Tracker\n");
    output.push_str(&format!(
        "  Goal: {}  Deposit: {}/month\n",
        plan.goal.format_with_symbol(sym),
        plan.monthly_deposit.format_with_symbol(sym)
    ));

    if milestones.is_empty() {
        output.push_str("  Goal already reached\n");
        return output;
    }

    let rows: Vec<ScheduleRow> = milestones
        .iter()
        .map(|m| ScheduleRow {
            month: m.month,
            balance: m.balance.format_with_symbol(sym),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    output.push_str(&table.to_string());
    output.push('\n');

    let months = milestones.len();
    if months == 1 {
        output.push_str("  Goal reached in 1 month\n");
    } else {
        output.push_str(&format!("  Goal reached in {} months\n", months));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::standing_for;
    use crate::samples;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_standing_check_line() {
        let balance = samples::standing_check_balance();
        let standing = standing_for(balance, settings().low_balance_threshold);
        let output = format_standing_check(balance, standing, &settings());
        assert!(output.contains("Balance $300.00: Low Balance Warning"));
    }

    #[test]
    fn test_classification_line() {
        let amount = samples::classification_amount();
        let output = format_classification(amount, TransactionKind::classify(amount), &settings());
        assert!(output.contains("Amount -$300.00: Expense"));
    }

    #[test]
    fn test_monthly_report_output() {
        let report = MonthlyExpenseReport::generate(
            &samples::month_labels(),
            &samples::monthly_expenses(),
            settings().large_expense_threshold,
        )
        .unwrap();
        let output = format_monthly_report(&report, &settings());

        assert!(output.contains("  Jan: -$10.00"));
        assert!(output.contains("  Total: -$1190.00"));
        assert!(output.contains("Large Expenses (below -$100.00)"));
        assert!(output.contains("  Apr: -$400.00"));
        // May's -$80 expense is not large
        let large_section = output.split("Large Expenses").nth(1).unwrap();
        assert!(!large_section.contains("May"));
    }

    #[test]
    fn test_savings_schedule_output() {
        let plan = SavingsPlan::new(
            Money::from_dollars(5000),
            Money::from_dollars(500),
            Money::zero(),
        );
        let milestones = plan.projection().unwrap();
        let output = format_savings_schedule(&plan, &milestones, &settings());

        assert!(output.contains("Goal: $5000.00"));
        assert!(output.contains("$500.00/month"));
        assert!(output.contains("Goal reached in 10 months"));
    }

    #[test]
    fn test_savings_schedule_goal_met() {
        let plan = SavingsPlan::new(Money::zero(), Money::from_dollars(1), Money::zero());
        let output = format_savings_schedule(&plan, &[], &settings());
        assert!(output.contains("Goal already reached"));
    }

    #[test]
    fn test_savings_single_month_wording() {
        let plan = SavingsPlan::new(
            Money::from_dollars(100),
            Money::from_dollars(100),
            Money::zero(),
        );
        let milestones = plan.projection().unwrap();
        let output = format_savings_schedule(&plan, &milestones, &settings());
        assert!(output.contains("Goal reached in 1 month\n"));
    }
}
