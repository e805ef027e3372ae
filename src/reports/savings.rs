//! Savings goal projection
//!
//! Projects a fixed monthly deposit toward a savings goal and reports how
//! many months it takes to get there.

use crate::error::{FintroError, FintroResult};
use crate::models::Money;

/// A fixed-deposit savings plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsPlan {
    /// Target balance
    pub goal: Money,
    /// Deposit made each month
    pub monthly_deposit: Money,
    /// Balance before the first deposit
    pub starting_balance: Money,
}

/// One projected month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsMilestone {
    /// Month number, starting at 1
    pub month: u32,
    /// Balance after this month's deposit
    pub balance: Money,
}

impl SavingsPlan {
    /// Create a new plan
    pub fn new(goal: Money, monthly_deposit: Money, starting_balance: Money) -> Self {
        Self {
            goal,
            monthly_deposit,
            starting_balance,
        }
    }

    /// Validate the plan
    ///
    /// A plan that still needs money must have a positive deposit, otherwise
    /// the projection would never terminate.
    pub fn validate(&self) -> FintroResult<()> {
        if self.starting_balance < self.goal && !self.monthly_deposit.is_positive() {
            return Err(FintroError::Validation(format!(
                "Monthly deposit must be positive to reach {} from {}",
                self.goal, self.starting_balance
            )));
        }
        Ok(())
    }

    /// Project month-by-month balances until the goal is reached
    ///
    /// Returns one milestone per month. A plan whose goal is already met
    /// projects no months.
    pub fn projection(&self) -> FintroResult<Vec<SavingsMilestone>> {
        self.validate()?;

        let mut milestones = Vec::new();
        let mut balance = self.starting_balance;
        let mut month = 0u32;

        while balance < self.goal {
            month += 1;
            balance += self.monthly_deposit;
            milestones.push(SavingsMilestone { month, balance });
        }

        Ok(milestones)
    }

    /// Number of months until the goal is reached
    pub fn months_to_goal(&self) -> FintroResult<u32> {
        Ok(self.projection()?.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SavingsPlan {
        SavingsPlan::new(
            Money::from_dollars(5000),
            Money::from_dollars(500),
            Money::zero(),
        )
    }

    #[test]
    fn test_months_to_goal() {
        assert_eq!(sample_plan().months_to_goal().unwrap(), 10);
    }

    #[test]
    fn test_projection_one_milestone_per_month() {
        let milestones = sample_plan().projection().unwrap();
        assert_eq!(milestones.len(), 10);
        assert_eq!(milestones[0].month, 1);
        assert_eq!(milestones[0].balance, Money::from_dollars(500));
        assert_eq!(milestones[9].month, 10);
        assert_eq!(milestones[9].balance, Money::from_dollars(5000));
    }

    #[test]
    fn test_goal_already_met() {
        let plan = SavingsPlan::new(
            Money::from_dollars(1000),
            Money::from_dollars(100),
            Money::from_dollars(1000),
        );
        assert_eq!(plan.months_to_goal().unwrap(), 0);
    }

    #[test]
    fn test_final_month_may_overshoot() {
        let plan = SavingsPlan::new(
            Money::from_dollars(1000),
            Money::from_dollars(300),
            Money::zero(),
        );
        let milestones = plan.projection().unwrap();
        assert_eq!(milestones.len(), 4);
        assert_eq!(milestones[3].balance, Money::from_dollars(1200));
    }

    #[test]
    fn test_zero_deposit_rejected() {
        let plan = SavingsPlan::new(Money::from_dollars(1000), Money::zero(), Money::zero());
        assert!(matches!(
            plan.projection(),
            Err(FintroError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_deposit_ok_when_goal_met() {
        let plan = SavingsPlan::new(Money::zero(), Money::zero(), Money::zero());
        assert_eq!(plan.months_to_goal().unwrap(), 0);
    }
}
