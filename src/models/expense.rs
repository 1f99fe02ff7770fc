//! Expense model
//!
//! A single recorded spend: what it was for, how much, which category and
//! on which day.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{find_category, lookup_category, Category};
use super::ids::ExpenseId;
use super::money::{Money, MAX_AMOUNT};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, stable for the lifetime of the record
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Category id from the category table
    pub category: String,

    /// Day the money was spent
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            description: description.into().trim().to_string(),
            amount,
            category: category.into(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display metadata for this expense's category (fallback if unknown)
    pub fn category_info(&self) -> &'static Category {
        lookup_category(&self.category)
    }

    /// Validate a new or edited expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::DescriptionRequired);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::InvalidAmount(self.amount));
        }

        if !self.amount.is_within_limit() {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::CategoryRequired);
        }

        if find_category(&self.category).is_none() {
            return Err(ExpenseValidationError::UnknownCategory(self.category.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    DescriptionRequired,
    InvalidAmount(Money),
    AmountTooLarge(Money),
    CategoryRequired,
    UnknownCategory(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DescriptionRequired => write!(f, "Description is required"),
            Self::InvalidAmount(amount) => {
                write!(f, "Please enter a valid amount (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount is too large (got {}, maximum {})",
                amount, MAX_AMOUNT
            ),
            Self::CategoryRequired => write!(f, "Please select a category"),
            Self::UnknownCategory(id) => write!(f, "Unknown category '{}'", id),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
