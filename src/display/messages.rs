//! Fixed user-facing messages

/// An empty-state block: emoji, title, hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub emoji: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

impl EmptyState {
    pub fn render(&self) -> String {
        format!("{} {}\n{}\n", self.emoji, self.title, self.message)
    }
}

pub const NO_EXPENSES: EmptyState = EmptyState {
    emoji: "🎯",
    title: "No expenses yet!",
    message: "Start tracking by adding your first expense: budget expense add <amount> <description>",
};

pub const FILTER_NO_RESULTS: EmptyState = EmptyState {
    emoji: "🔍",
    title: "No expenses found",
    message: "Try adjusting your filters.",
};

pub const NO_SPENDING_DATA: EmptyState = EmptyState {
    emoji: "📊",
    title: "No spending data yet",
    message: "Add some expenses to see your spending breakdown!",
};

pub const NO_SPENDING_TREND: EmptyState = EmptyState {
    emoji: "📈",
    title: "No spending trend yet",
    message: "Add expenses to see your daily spending pattern!",
};

pub const NO_BUDGET: EmptyState = EmptyState {
    emoji: "💰",
    title: "Set your budget",
    message: "Let's start by setting your monthly budget: budget budget set <amount>",
};

pub const EXPENSE_ADDED: &str = "Expense added successfully! 🎉";
pub const EXPENSE_UPDATED: &str = "Expense updated! ✅";
pub const EXPENSE_DELETED: &str = "Expense deleted! 🗑️";
pub const BUDGET_UPDATED: &str = "Budget updated successfully! 💰";
pub const BUDGET_GOAL_MET: &str = "Amazing! You stayed within budget this month! 🏆";

/// Emoji shown next to a theme name
pub fn theme_emoji(theme: crate::config::Theme) -> &'static str {
    match theme {
        crate::config::Theme::Light => "☀️",
        crate::config::Theme::Dark => "🌙",
    }
}
