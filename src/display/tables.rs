//! Reference tables rendered with `tabled`

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CurrencyCode, CATEGORIES, CURRENCIES};

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "")]
    emoji: &'static str,
    #[tabled(rename = "ID")]
    id: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Colour")]
    color: &'static str,
}

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = "")]
    current: &'static str,
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
}

/// Every category in display order
pub fn format_category_table() -> String {
    let rows = CATEGORIES.iter().map(|c| CategoryRow {
        emoji: c.emoji,
        id: c.id,
        name: c.name,
        color: c.color,
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Every supported currency, marking the one in use
pub fn format_currency_table(selected: &CurrencyCode) -> String {
    let selected = selected.currency().code;
    let rows = CURRENCIES.iter().map(|c| CurrencyRow {
        current: if c.code == selected { "*" } else { "" },
        code: c.code,
        symbol: c.symbol,
        name: c.name,
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
