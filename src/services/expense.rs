//! Expense service
//!
//! Creating, editing, deleting and listing expenses. Every mutation is
//! validated, saved and written to the audit log.

use chrono::{NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{resolve_category, Expense, ExpenseId, Money, Month};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub month: Option<Month>,
    /// Category id, as resolved from user input
    pub category: Option<String>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn category(mut self, category_id: impl Into<String>) -> Self {
        self.category = Some(category_id.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether any narrowing option is set
    pub fn is_filtered(&self) -> bool {
        self.month.is_some() || self.category.is_some()
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    /// Category id or name as typed by the user
    pub category: String,
    pub date: NaiveDate,
}

/// Changes to apply to an existing expense; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseInput {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl UpdateExpenseInput {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }
}

/// Map user input to a category id
fn resolve_category_id(input: &str) -> BudgetResult<&'static str> {
    if input.trim().is_empty() {
        return Err(BudgetError::Validation("Please select a category".into()));
    }
    resolve_category(input)
        .map(|c| c.id)
        .ok_or_else(|| BudgetError::category_not_found(input.trim()))
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn create(&self, input: CreateExpenseInput) -> BudgetResult<Expense> {
        let category = resolve_category_id(&input.category)?;
        let expense = Expense::new(input.description, input.amount, category, input.date);

        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    pub fn get(&self, id: ExpenseId) -> BudgetResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full id or by a prefix of it ("exp-1a2b3c4d").
    ///
    /// A prefix that matches more than one expense is an error.
    pub fn find(&self, identifier: &str) -> BudgetResult<Expense> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self
                .storage
                .expenses
                .get(id)?
                .ok_or_else(|| BudgetError::expense_not_found(identifier));
        }

        let ids = self.storage.expenses.find_ids_by_prefix(identifier)?;
        match ids.as_slice() {
            [id] => self
                .storage
                .expenses
                .get(*id)?
                .ok_or_else(|| BudgetError::expense_not_found(identifier)),
            [] => Err(BudgetError::expense_not_found(identifier)),
            _ => Err(BudgetError::Ambiguous {
                entity_type: "Expense",
                identifier: identifier.to_string(),
            }),
        }
    }

    /// List expenses newest first
    pub fn list(&self, filter: &ExpenseFilter) -> BudgetResult<Vec<Expense>> {
        let mut expenses = match filter.month {
            Some(month) => self.storage.expenses.get_by_month(month)?,
            None => self.storage.expenses.get_all()?,
        };

        if let Some(category) = &filter.category {
            expenses.retain(|e| &e.category == category);
        }

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Apply changes to an expense
    pub fn update(&self, id: ExpenseId, changes: UpdateExpenseInput) -> BudgetResult<Expense> {
        let mut expense = self
            .storage
            .expenses
            .get(id)?
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        let before = expense.clone();

        if let Some(description) = changes.description {
            expense.description = description.trim().to_string();
        }
        if let Some(amount) = changes.amount {
            expense.amount = amount;
        }
        if let Some(category) = changes.category {
            expense.category = resolve_category_id(&category)?.to_string();
        }
        if let Some(date) = changes.date {
            expense.date = date;
        }

        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        if expense == before {
            return Ok(expense);
        }

        expense.updated_at = Utc::now();
        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_update(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &before,
            &expense,
        )?;

        Ok(expense)
    }

    /// Delete an expense, returning what was removed
    pub fn delete(&self, id: ExpenseId) -> BudgetResult<Expense> {
        let expense = self
            .storage
            .expenses
            .delete(id)?
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        Ok(expense)
    }

    /// Total spent in a month
    pub fn total_for_month(&self, month: Month) -> BudgetResult<Money> {
        Ok(self
            .storage
            .expenses
            .get_by_month(month)?
            .iter()
            .map(|e| e.amount)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::BudgetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(description: &str, cents: i64, category: &str, y: i32, m: u32, d: u32) -> CreateExpenseInput {
        CreateExpenseInput {
            description: description.to_string(),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }

    #[test]
    fn test_create_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service
            .create(input("Weekly shop", 3250, "Food", 2025, 1, 6))
            .unwrap();
        assert_eq!(expense.category, "food");
        assert_eq!(storage.expenses.count().unwrap(), 1);

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].operation, Operation::Create);
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.create(input("  ", 100, "food", 2025, 1, 1)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Description is required"));

        let err = service.create(input("Coffee", 0, "food", 2025, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("Please enter a valid amount"));

        let err = service.create(input("Coffee", 250, "", 2025, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("Please select a category"));

        let err = service.create(input("Coffee", 250, "rent", 2025, 1, 1)).unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_find_by_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.create(input("Gym", 1500, "health", 2025, 1, 2)).unwrap();

        assert_eq!(service.find(&expense.id.to_string()).unwrap().id, expense.id);
        assert_eq!(
            service.find(&expense.id.as_uuid().to_string()).unwrap().id,
            expense.id
        );
        assert!(service.find("exp-zzzzzzzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_find_ambiguous_prefix() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let a = Expense::new(
            "a",
            Money::from_cents(100),
            "food",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let mut b = a.clone();
        b.id = ExpenseId::parse("aaaaaaaa-0000-4000-8000-000000000002").unwrap();
        let mut a = a;
        a.id = ExpenseId::parse("aaaaaaaa-0000-4000-8000-000000000001").unwrap();
        storage.expenses.upsert(a).unwrap();
        storage.expenses.upsert(b).unwrap();

        assert!(matches!(
            service.find("exp-aaaa"),
            Err(BudgetError::Ambiguous { .. })
        ));
        assert!(service.find("aaaaaaaa-0000-4000-8000-000000000001").is_ok());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.create(input("Lunch", 800, "food", 2025, 1, 3)).unwrap();
        service.create(input("Bus", 250, "transport", 2025, 1, 4)).unwrap();
        service.create(input("Dinner", 1500, "food", 2025, 2, 1)).unwrap();

        let all = service.list(&ExpenseFilter::new()).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].description, "Dinner");

        let january = Month::new(2025, 1).unwrap();
        let food_in_jan = service
            .list(&ExpenseFilter::new().month(january).category("food"))
            .unwrap();
        assert_eq!(food_in_jan.len(), 1);
        assert_eq!(food_in_jan[0].description, "Lunch");

        assert_eq!(service.list(&ExpenseFilter::new().limit(2)).unwrap().len(), 2);
        assert_eq!(
            service.total_for_month(january).unwrap(),
            Money::from_cents(1050)
        );
    }

    #[test]
    fn test_update_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.create(input("Bus", 250, "transport", 2025, 1, 4)).unwrap();
        let updated = service
            .update(
                expense.id,
                UpdateExpenseInput {
                    amount: Some(Money::from_cents(300)),
                    category: Some("other".into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.amount.cents(), 300);
        assert_eq!(updated.category, "other");
        assert_eq!(updated.description, "Bus");

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].operation, Operation::Update);
        let diff = log[1].diff_summary.as_deref().unwrap();
        assert!(diff.contains("amount: 250 -> 300"));
    }

    #[test]
    fn test_update_rejects_invalid_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.create(input("Bus", 250, "transport", 2025, 1, 4)).unwrap();
        let result = service.update(
            expense.id,
            UpdateExpenseInput {
                amount: Some(Money::from_cents(-5)),
                ..Default::default()
            },
        );

        assert!(result.unwrap_err().is_validation());
        assert_eq!(storage.expenses.get(expense.id).unwrap().unwrap().amount.cents(), 250);
    }

    #[test]
    fn test_delete_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.create(input("Cinema", 1200, "entertainment", 2025, 1, 4)).unwrap();
        let removed = service.delete(expense.id).unwrap();
        assert_eq!(removed.description, "Cinema");
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(service.delete(expense.id).unwrap_err().is_not_found());

        let log = storage.audit().read_all().unwrap();
        assert_eq!(log.last().unwrap().operation, Operation::Delete);
    }
}
