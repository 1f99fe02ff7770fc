//! User settings for student-budget
//!
//! Holds the monthly budget, preferred currency, theme and onboarding state.
//! Every field has a default so older or hand-edited config files still load.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{Currency, CurrencyCode, Money, DEFAULT_MONTHLY_BUDGET};

/// Colour theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User settings for student-budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Spending limit for each calendar month
    #[serde(default = "default_monthly_budget")]
    pub monthly_budget: Money,

    /// Currency used for all amounts
    #[serde(default)]
    pub currency: CurrencyCode,

    #[serde(default)]
    pub theme: Theme,

    /// Name shown in greetings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Whether `init` has been completed
    #[serde(default)]
    pub onboarding_complete: bool,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_monthly_budget() -> Money {
    DEFAULT_MONTHLY_BUDGET
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            monthly_budget: default_monthly_budget(),
            currency: CurrencyCode::default(),
            theme: Theme::default(),
            user_name: None,
            onboarding_complete: false,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Descriptor of the configured currency (GBP if the code is unknown)
    pub fn currency(&self) -> &'static Currency {
        self.currency.currency()
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency().symbol)
    }

    /// Greeting name, if one has been set
    pub fn display_name(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
