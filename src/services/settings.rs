//! Settings service
//!
//! Applies user preference changes, persists them and records them in the
//! audit log.

use crate::audit::EntityType;
use crate::config::{Settings, Theme};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CurrencyCode, Money};
use crate::storage::Storage;

const SETTINGS_ENTITY_ID: &str = "settings";

/// Choices made during onboarding
#[derive(Debug, Clone, Default)]
pub struct OnboardingInput {
    pub user_name: Option<String>,
    pub monthly_budget: Option<Money>,
    pub currency: Option<String>,
}

/// Service for user settings
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Apply `change` to the settings, then save and log if anything changed
    fn apply<F>(&self, settings: &mut Settings, change: F) -> BudgetResult<()>
    where
        F: FnOnce(&mut Settings),
    {
        let before = serde_json::to_value(&*settings)?;
        change(settings);
        let after = serde_json::to_value(&*settings)?;

        if before == after {
            return Ok(());
        }

        settings.save(self.storage.paths())?;
        self.storage
            .log_update(EntityType::Settings, SETTINGS_ENTITY_ID, None, &before, &after)
    }

    /// Complete onboarding with the given choices
    pub fn complete_onboarding(
        &self,
        settings: &mut Settings,
        input: OnboardingInput,
    ) -> BudgetResult<()> {
        let currency = input.currency.as_deref().map(parse_currency).transpose()?;

        if let Some(budget) = input.monthly_budget {
            if !budget.is_positive() || !budget.is_within_limit() {
                return Err(BudgetError::Validation(
                    "Budget amount is required".to_string(),
                ));
            }
        }

        let first_run = !self.storage.is_initialized();
        if first_run {
            let mut fresh = settings.clone();
            apply_onboarding(&mut fresh, input, currency);
            fresh.save(self.storage.paths())?;
            self.storage.log_create(
                EntityType::Settings,
                SETTINGS_ENTITY_ID,
                fresh.display_name().map(str::to_string),
                &fresh,
            )?;
            *settings = fresh;
            return Ok(());
        }

        self.apply(settings, |s| apply_onboarding(s, input, currency))
    }

    pub fn set_currency(&self, settings: &mut Settings, code: &str) -> BudgetResult<()> {
        let currency = parse_currency(code)?;
        self.apply(settings, |s| s.currency = currency)
    }

    pub fn set_theme(&self, settings: &mut Settings, theme: Theme) -> BudgetResult<()> {
        self.apply(settings, |s| s.theme = theme)
    }

    /// Set the greeting name; an empty name clears it
    pub fn set_user_name(&self, settings: &mut Settings, name: &str) -> BudgetResult<()> {
        let name = name.trim();
        let name = (!name.is_empty()).then(|| name.to_string());
        self.apply(settings, |s| s.user_name = name)
    }
}

fn parse_currency(code: &str) -> BudgetResult<CurrencyCode> {
    CurrencyCode::parse(code).ok_or_else(|| BudgetError::currency_not_found(code.trim()))
}

fn apply_onboarding(settings: &mut Settings, input: OnboardingInput, currency: Option<CurrencyCode>) {
    if let Some(name) = input.user_name {
        let name = name.trim();
        if !name.is_empty() {
            settings.user_name = Some(name.to_string());
        }
    }
    if let Some(budget) = input.monthly_budget {
        settings.monthly_budget = budget;
    }
    if let Some(currency) = currency {
        settings.currency = currency;
    }
    settings.onboarding_complete = true;
}
