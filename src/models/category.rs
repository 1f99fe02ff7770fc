//! Expense categories
//!
//! Categories are a fixed, ordered table compiled into the binary. Expenses
//! refer to them by id; an id that is not in the table (for example from a
//! hand-edited data file) resolves to the fallback category.

use serde::Serialize;
use std::fmt;

/// A spending category with its display metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Base colour (hex)
    pub color: &'static str,
    pub light_color: &'static str,
    pub dark_color: &'static str,
}

/// Id of the category that unknown ids resolve to
pub const FALLBACK_CATEGORY_ID: &str = "other";

/// Every category, in display order
pub const CATEGORIES: [Category; 8] = [
    Category {
        id: "food",
        name: "Food & Groceries",
        emoji: "🍔",
        color: "#FF6B6B",
        light_color: "#FFE5E5",
        dark_color: "#CC5555",
    },
    Category {
        id: "transport",
        name: "Transport",
        emoji: "🚌",
        color: "#9B59B6",
        light_color: "#F4ECF7",
        dark_color: "#7C4792",
    },
    Category {
        id: "study",
        name: "Study Materials",
        emoji: "📚",
        color: "#3498DB",
        light_color: "#EBF5FB",
        dark_color: "#2A7AAF",
    },
    Category {
        id: "accommodation",
        name: "Accommodation",
        emoji: "🏠",
        color: "#E67E22",
        light_color: "#FDF2E9",
        dark_color: "#B8651B",
    },
    Category {
        id: "entertainment",
        name: "Entertainment",
        emoji: "🎉",
        color: "#E91E63",
        light_color: "#FCE4EC",
        dark_color: "#BA184F",
    },
    Category {
        id: "health",
        name: "Health & Fitness",
        emoji: "💪",
        color: "#27AE60",
        light_color: "#E8F8F5",
        dark_color: "#1F8B4D",
    },
    Category {
        id: "shopping",
        name: "Shopping",
        emoji: "🛍️",
        color: "#F39C12",
        light_color: "#FEF5E7",
        dark_color: "#C27D0E",
    },
    Category {
        id: "other",
        name: "Other",
        emoji: "💰",
        color: "#16A085",
        light_color: "#E8F6F3",
        dark_color: "#11806A",
    },
];

/// The fallback category
pub fn fallback_category() -> &'static Category {
    // "other" is the last entry of the table
    &CATEGORIES[CATEGORIES.len() - 1]
}

/// Exact lookup by id
pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Lookup by id that never fails: unknown ids get the fallback category
pub fn lookup_category(id: &str) -> &'static Category {
    find_category(id).unwrap_or_else(fallback_category)
}

/// Resolve user input to a category.
///
/// Matches the id or the display name, case-insensitively, and then a unique
/// name prefix ("health" and "Health & Fitness" both work).
pub fn resolve_category(input: &str) -> Option<&'static Category> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(c) = CATEGORIES
        .iter()
        .find(|c| c.id == needle || c.name.to_lowercase() == needle)
    {
        return Some(c);
    }

    let mut prefixed = CATEGORIES
        .iter()
        .filter(|c| c.name.to_lowercase().starts_with(&needle));
    match (prefixed.next(), prefixed.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl Category {
    pub fn is_fallback(&self) -> bool {
        self.id == FALLBACK_CATEGORY_ID
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}
