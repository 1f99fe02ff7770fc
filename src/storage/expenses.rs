//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to `data/expenses.json`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::{Expense, ExpenseId, Month};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of expenses.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Newest first; same-day expenses by creation time, newest first
fn newest_first(a: &Expense, b: &Expense) -> std::cmp::Ordering {
    b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at))
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk, replacing anything held in memory
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), BudgetError> {
        let expenses = self.get_all()?;
        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All expenses, newest first
    pub fn get_all(&self) -> Result<Vec<Expense>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(newest_first);
        Ok(expenses)
    }

    /// Expenses dated within `month`, newest first
    pub fn get_by_month(&self, month: Month) -> Result<Vec<Expense>, BudgetError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| month.contains(e.date))
            .collect())
    }

    /// Ids whose short or full form starts with `fragment`
    pub fn find_ids_by_prefix(&self, fragment: &str) -> Result<Vec<ExpenseId>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .keys()
            .filter(|id| id.matches_prefix(fragment))
            .copied()
            .collect())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn expense(description: &str, cents: i64, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            description,
            Money::from_cents(cents),
            "food",
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        let e = expense("Lunch", 850, 2025, 1, 15);
        let id = e.id;

        repo.upsert(e).unwrap();
        assert_eq!(repo.get(id).unwrap().unwrap().amount.cents(), 850);

        let mut edited = repo.get(id).unwrap().unwrap();
        edited.amount = Money::from_cents(900);
        repo.upsert(edited).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get(id).unwrap().unwrap().amount.cents(), 900);
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense("a", 100, 2025, 1, 10)).unwrap();
        repo.upsert(expense("b", 100, 2025, 2, 1)).unwrap();
        repo.upsert(expense("c", 100, 2024, 12, 31)).unwrap();

        let names: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.description)
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_get_by_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(expense("jan", 100, 2025, 1, 31)).unwrap();
        repo.upsert(expense("feb", 200, 2025, 2, 1)).unwrap();
        repo.upsert(expense("old jan", 300, 2024, 1, 5)).unwrap();

        let jan = repo.get_by_month(Month::new(2025, 1).unwrap()).unwrap();
        assert_eq!(jan.len(), 1);
        assert_eq!(jan[0].description, "jan");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let e = expense("Textbook", 4599, 2025, 1, 15);
        let id = e.id;

        repo.upsert(e).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get(id).unwrap().unwrap().description, "Textbook");
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let e = expense("Cinema", 1200, 2025, 1, 15);
        let id = e.id;
        repo.upsert(e).unwrap();

        assert_eq!(repo.delete(id).unwrap().unwrap().description, "Cinema");
        assert!(repo.delete(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_find_ids_by_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        let e = expense("Coffee", 250, 2025, 1, 15);
        let id = e.id;
        repo.upsert(e).unwrap();

        assert_eq!(repo.find_ids_by_prefix(&id.to_string()).unwrap(), vec![id]);
        assert!(repo.find_ids_by_prefix("zzzz").unwrap().is_empty());
    }
}
