//! Budget service
//!
//! Monthly budget status and changes to the monthly budget amount.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{evaluate_budget, BudgetBand, BudgetStatus, Money, Month};
use crate::storage::Storage;

/// Audit id of the monthly budget setting
const BUDGET_ENTITY_ID: &str = "monthly-budget";

/// A month's spending measured against the budget
#[derive(Debug, Clone)]
pub struct MonthlyBudgetSummary {
    pub month: Month,
    pub status: BudgetStatus,
    pub expense_count: usize,
    /// The month is over and spending finished on track
    pub goal_met: bool,
}

/// Service for the monthly budget
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Evaluate a month's spending against `budget`.
    ///
    /// `today` decides whether the month has finished.
    pub fn summary(
        &self,
        month: Month,
        budget: Money,
        today: NaiveDate,
    ) -> BudgetResult<MonthlyBudgetSummary> {
        let expenses = self.storage.expenses.get_by_month(month)?;
        let spent: Money = expenses.iter().map(|e| e.amount).sum();
        let status = evaluate_budget(spent, budget);

        Ok(MonthlyBudgetSummary {
            month,
            expense_count: expenses.len(),
            goal_met: month < Month::of(today) && status.band == BudgetBand::OnTrack,
            status,
        })
    }

    /// Change the monthly budget, saving settings and logging the change
    pub fn set_monthly_budget(&self, settings: &mut Settings, amount: Money) -> BudgetResult<()> {
        if !amount.is_positive() || !amount.is_within_limit() {
            return Err(BudgetError::Validation(format!(
                "Please enter a valid amount (got {})",
                amount
            )));
        }

        let before = settings.monthly_budget;
        if before == amount {
            return Ok(());
        }

        settings.monthly_budget = amount;
        settings.save(self.storage.paths())?;

        self.storage.log_update(
            EntityType::Budget,
            BUDGET_ENTITY_ID,
            Some(settings.format_money(amount)),
            &before,
            &amount,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::{Expense, MAX_AMOUNT};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(storage: &Storage, cents: i64, on: NaiveDate) {
        storage
            .expenses
            .upsert(Expense::new("item", Money::from_cents(cents), "food", on))
            .unwrap();
    }

    #[test]
    fn test_summary_counts_only_the_month() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 20_000, date(2025, 1, 5));
        add(&storage, 20_000, date(2025, 1, 20));
        add(&storage, 90_000, date(2025, 2, 1));

        let service = BudgetService::new(&storage);
        let summary = service
            .summary(Month::new(2025, 1).unwrap(), Money::from_cents(50_000), date(2025, 1, 25))
            .unwrap();

        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.status.spent, Money::from_cents(40_000));
        assert_eq!(summary.status.band, BudgetBand::Caution);
        assert!(!summary.goal_met);
    }

    #[test]
    fn test_goal_met_only_for_finished_months_on_track() {
        let (_temp_dir, storage) = create_test_storage();
        add(&storage, 10_000, date(2025, 1, 5));
        let service = BudgetService::new(&storage);
        let january = Month::new(2025, 1).unwrap();
        let budget = Money::from_cents(50_000);

        assert!(!service.summary(january, budget, date(2025, 1, 31)).unwrap().goal_met);
        assert!(service.summary(january, budget, date(2025, 2, 1)).unwrap().goal_met);

        add(&storage, 40_000, date(2025, 1, 6));
        assert!(!service.summary(january, budget, date(2025, 2, 1)).unwrap().goal_met);
    }

    #[test]
    fn test_empty_month_is_on_track() {
        let (_temp_dir, storage) = create_test_storage();
        let summary = BudgetService::new(&storage)
            .summary(Month::new(2025, 3).unwrap(), Money::from_cents(50_000), date(2025, 3, 1))
            .unwrap();

        assert_eq!(summary.expense_count, 0);
        assert_eq!(summary.status.band, BudgetBand::OnTrack);
    }

    #[test]
    fn test_set_monthly_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let mut settings = Settings::default();

        service
            .set_monthly_budget(&mut settings, Money::from_cents(65_000))
            .unwrap();
        assert_eq!(settings.monthly_budget.cents(), 65_000);

        let reloaded = Settings::load_or_create(storage.paths()).unwrap();
        assert_eq!(reloaded.monthly_budget.cents(), 65_000);

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].entity_type, EntityType::Budget);
        assert_eq!(log[0].diff_summary.as_deref(), Some("50000 -> 65000"));
    }

    #[test]
    fn test_set_monthly_budget_rejects_non_positive() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let mut settings = Settings::default();

        let err = service
            .set_monthly_budget(&mut settings, Money::zero())
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .set_monthly_budget(&mut settings, Money::from_cents(MAX_AMOUNT.cents() + 1))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(settings.monthly_budget.cents(), 50_000);
    }
}
