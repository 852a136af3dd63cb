//! Input validation for the budgeting, saving and expense modules.
//!
//! Validators never touch the user record. A failure carries the message to
//! show the learner; a success carries the figures the module displays.

use rust_decimal::Decimal;
use serde::Serialize;

/// Why a module form was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Income is zero or negative
    #[error("Income must be a positive number")]
    IncomeNotPositive,

    /// Expenses are negative
    #[error("Expenses cannot be negative")]
    NegativeExpenses,

    /// Income or goal is zero or negative
    #[error("Income and goal must be positive")]
    IncomeOrGoalNotPositive,

    /// Expenses consume the whole income
    #[error("Monthly surplus is zero or negative. Balance your budget first.")]
    NoMonthlySurplus,

    /// Expense amount is zero or negative
    #[error("Amount must be positive")]
    AmountNotPositive,

    /// Result falls outside the representable decimal range
    #[error("Amount is too large")]
    AmountTooLarge,
}

/// Budget evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCheck {
    /// Income covers expenses
    pub is_balanced: bool,
    /// Income minus expenses; negative when unbalanced
    pub surplus: Decimal,
}

/// Annual saving goal evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoalCheck {
    /// Goal fits within a year of surplus
    pub is_realistic: bool,
    /// Twelve months of surplus
    pub max_annual_savings: Decimal,
    /// Monthly saving needed to hit the goal
    pub monthly_required: Decimal,
}

/// Expense evaluation against a wallet balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCheck {
    /// Balance would drop below zero
    pub will_overspend: bool,
    /// Balance after the expense
    pub new_balance: Decimal,
    /// Magnitude of the new balance
    pub remaining_amount: Decimal,
}

/// Check a monthly budget.
pub fn validate_budget(income: Decimal, expenses: Decimal) -> Result<BudgetCheck, ValidationError> {
    if income <= Decimal::ZERO {
        return Err(ValidationError::IncomeNotPositive);
    }
    if expenses < Decimal::ZERO {
        return Err(ValidationError::NegativeExpenses);
    }

    let surplus = income
        .checked_sub(expenses)
        .ok_or(ValidationError::AmountTooLarge)?;
    Ok(BudgetCheck {
        is_balanced: income >= expenses,
        surplus,
    })
}

/// Check an annual saving goal against monthly income and expenses.
pub fn validate_saving_goal(
    income: Decimal,
    expenses: Decimal,
    goal: Decimal,
) -> Result<SavingGoalCheck, ValidationError> {
    if income <= Decimal::ZERO || goal <= Decimal::ZERO {
        return Err(ValidationError::IncomeOrGoalNotPositive);
    }
    if expenses < Decimal::ZERO {
        return Err(ValidationError::NegativeExpenses);
    }

    let monthly_surplus = income
        .checked_sub(expenses)
        .ok_or(ValidationError::AmountTooLarge)?;
    if monthly_surplus <= Decimal::ZERO {
        return Err(ValidationError::NoMonthlySurplus);
    }

    let months = Decimal::from(12);
    let max_annual_savings = monthly_surplus
        .checked_mul(months)
        .ok_or(ValidationError::AmountTooLarge)?;
    Ok(SavingGoalCheck {
        is_realistic: goal <= max_annual_savings,
        max_annual_savings,
        monthly_required: goal / months,
    })
}

/// Check an expense against the current balance. Overspending is flagged, not rejected.
pub fn validate_expense(amount: Decimal, current_balance: Decimal) -> Result<ExpenseCheck, ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::AmountNotPositive);
    }

    let new_balance = current_balance
        .checked_sub(amount)
        .ok_or(ValidationError::AmountTooLarge)?;
    Ok(ExpenseCheck {
        will_overspend: new_balance < Decimal::ZERO,
        new_balance,
        remaining_amount: new_balance.abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_budget_balanced_and_unbalanced() {
        let balanced = validate_budget(dec!(5000), dec!(3500)).unwrap();
        assert!(balanced.is_balanced);
        assert_eq!(balanced.surplus, dec!(1500));

        let even = validate_budget(dec!(2000), dec!(2000)).unwrap();
        assert!(even.is_balanced);
        assert_eq!(even.surplus, Decimal::ZERO);

        let over = validate_budget(dec!(1000), dec!(1250.50)).unwrap();
        assert!(!over.is_balanced);
        assert_eq!(over.surplus, dec!(-250.50));
    }

    #[test]
    fn test_budget_rejections() {
        assert_eq!(validate_budget(dec!(0), dec!(10)), Err(ValidationError::IncomeNotPositive));
        assert_eq!(validate_budget(dec!(-1), dec!(10)), Err(ValidationError::IncomeNotPositive));
        assert_eq!(validate_budget(dec!(100), dec!(-0.01)), Err(ValidationError::NegativeExpenses));
        assert_eq!(validate_budget(dec!(100), dec!(0)).unwrap().surplus, dec!(100));
    }

    #[test]
    fn test_saving_goal_realistic() {
        let check = validate_saving_goal(dec!(60000), dec!(40000), dec!(120000)).unwrap();
        assert!(check.is_realistic);
        assert_eq!(check.max_annual_savings, dec!(240000));
        assert_eq!(check.monthly_required, dec!(10000));
    }

    #[test]
    fn test_saving_goal_unrealistic_still_reports_monthly_required() {
        let check = validate_saving_goal(dec!(1000), dec!(900), dec!(6000)).unwrap();
        assert!(!check.is_realistic);
        assert_eq!(check.max_annual_savings, dec!(1200));
        assert_eq!(check.monthly_required, dec!(500));
    }

    #[test]
    fn test_saving_goal_rejections() {
        let err = validate_saving_goal(dec!(1000), dec!(1200), dec!(5000)).unwrap_err();
        assert_eq!(err, ValidationError::NoMonthlySurplus);
        assert_eq!(
            err.to_string(),
            "Monthly surplus is zero or negative. Balance your budget first."
        );

        assert_eq!(
            validate_saving_goal(dec!(1000), dec!(1000), dec!(5000)),
            Err(ValidationError::NoMonthlySurplus)
        );
        assert_eq!(
            validate_saving_goal(dec!(1000), dec!(100), dec!(0)),
            Err(ValidationError::IncomeOrGoalNotPositive)
        );
        assert_eq!(
            validate_saving_goal(dec!(0), dec!(100), dec!(500)),
            Err(ValidationError::IncomeOrGoalNotPositive)
        );
        assert_eq!(
            validate_saving_goal(dec!(1000), dec!(-5), dec!(500)),
            Err(ValidationError::NegativeExpenses)
        );
    }

    #[test]
    fn test_expense_overspend_is_flagged() {
        let check = validate_expense(dec!(100), dec!(50)).unwrap();
        assert!(check.will_overspend);
        assert_eq!(check.new_balance, dec!(-50));
        assert_eq!(check.remaining_amount, dec!(50));
    }

    #[test]
    fn test_expense_within_balance() {
        let check = validate_expense(dec!(120.25), dec!(750)).unwrap();
        assert!(!check.will_overspend);
        assert_eq!(check.new_balance, dec!(629.75));
        assert_eq!(check.remaining_amount, dec!(629.75));

        // Negative balances are accepted as-is.
        let check = validate_expense(dec!(10), dec!(-20)).unwrap();
        assert_eq!(check.new_balance, dec!(-30));
    }

    #[test]
    fn test_expense_rejects_non_positive_amount() {
        assert_eq!(validate_expense(dec!(0), dec!(50)), Err(ValidationError::AmountNotPositive));
        assert_eq!(validate_expense(dec!(-5), dec!(50)), Err(ValidationError::AmountNotPositive));
    }

    #[test]
    fn test_overflowing_amounts_are_rejected() {
        assert_eq!(
            validate_saving_goal(Decimal::MAX, Decimal::ONE, Decimal::ONE),
            Err(ValidationError::AmountTooLarge)
        );
        assert_eq!(
            validate_expense(Decimal::MAX, -Decimal::MAX),
            Err(ValidationError::AmountTooLarge)
        );
        assert_eq!(ValidationError::AmountTooLarge.to_string(), "Amount is too large");

        // Largest values that still fit are evaluated normally.
        let check = validate_expense(Decimal::MAX, Decimal::ZERO).unwrap();
        assert_eq!(check.new_balance, -Decimal::MAX);
        assert!(check.will_overspend);
        assert_eq!(validate_budget(Decimal::MAX, Decimal::ZERO).unwrap().surplus, Decimal::MAX);
    }
}
