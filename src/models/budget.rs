//! Monthly budget status bands
//!
//! Spending is classified by the share of the monthly budget already used.
//! Bands are checked in ascending threshold order and the first one whose
//! threshold is not exceeded wins; anything above the last checked threshold
//! is over budget.

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Default monthly budget (500.00 in the configured currency)
pub const DEFAULT_MONTHLY_BUDGET: Money = Money::from_cents(50_000);

/// Classification of spending against the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetBand {
    /// Up to 70% of the budget spent
    OnTrack,
    /// Up to 85% of the budget spent
    Caution,
    /// More than 85% spent, including anything over 100%
    OverBudget,
}

/// Bands in evaluation order
pub const BUDGET_BANDS: [BudgetBand; 3] = [
    BudgetBand::OnTrack,
    BudgetBand::Caution,
    BudgetBand::OverBudget,
];

impl BudgetBand {
    /// Upper bound of the band as a percentage of the budget
    pub const fn threshold_percent(&self) -> i64 {
        match self {
            Self::OnTrack => 70,
            Self::Caution => 85,
            Self::OverBudget => 100,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::Caution => "Caution",
            Self::OverBudget => "Over Budget",
        }
    }

    /// Hex colour of the band
    pub const fn color(&self) -> &'static str {
        match self {
            Self::OnTrack => "#10B981",
            Self::Caution => "#F59E0B",
            Self::OverBudget => "#EF4444",
        }
    }

    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::OnTrack => "✅",
            Self::Caution => "⚠️",
            Self::OverBudget => "🚨",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::OnTrack => "You're doing great! Keep it up! 🎯",
            Self::Caution => "Careful! You're getting close to your limit.",
            Self::OverBudget => "Warning! You've exceeded your budget!",
        }
    }

    /// Classify `spent` against `budget`.
    ///
    /// A budget of zero or less cannot produce a ratio and is reported as
    /// over budget.
    pub fn classify(spent: Money, budget: Money) -> Self {
        if !budget.is_positive() {
            return Self::OverBudget;
        }

        // spent / budget <= pct / 100, kept in integers so 0.70 is exact
        let spent = spent.cents() as i128 * 100;
        let budget = budget.cents() as i128;
        for band in [Self::OnTrack, Self::Caution] {
            if spent <= budget * band.threshold_percent() as i128 {
                return band;
            }
        }
        Self::OverBudget
    }
}

impl fmt::Display for BudgetBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Spending measured against a budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub spent: Money,
    pub budget: Money,
    /// Budget minus spent; negative once overspent
    pub remaining: Money,
    /// spent / budget, absent when the budget is not positive
    pub ratio: Option<f64>,
    pub band: BudgetBand,
}

impl BudgetStatus {
    /// Share of the budget used as a percentage, if defined
    pub fn percent_used(&self) -> Option<f64> {
        self.ratio.map(|r| r * 100.0)
    }

    pub fn is_over_limit(&self) -> bool {
        self.spent > self.budget
    }
}

/// Evaluate spending against a budget
pub fn evaluate_budget(spent: Money, budget: Money) -> BudgetStatus {
    let ratio = if budget.is_positive() {
        Some(spent.cents() as f64 / budget.cents() as f64)
    } else {
        None
    };

    BudgetStatus {
        spent,
        budget,
        remaining: budget - spent,
        ratio,
        band: BudgetBand::classify(spent, budget),
    }
}
