//! Category color table.

use hookhub_entity::HookCategory;

/// Tailwind classes for a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEntry {
    /// Background classes (light and dark variants).
    pub background: &'static str,
    /// Foreground text classes (light and dark variants).
    pub text: &'static str,
}

/// Look up the badge style for `category`.
pub const fn category_style(category: HookCategory) -> StyleEntry {
    match category {
        HookCategory::Formatting => StyleEntry {
            background: "bg-blue-100 dark:bg-blue-900",
            text: "text-blue-800 dark:text-blue-200",
        },
        HookCategory::Testing => StyleEntry {
            background: "bg-green-100 dark:bg-green-900",
            text: "text-green-800 dark:text-green-200",
        },
        HookCategory::Git => StyleEntry {
            background: "bg-purple-100 dark:bg-purple-900",
            text: "text-purple-800 dark:text-purple-200",
        },
        HookCategory::Linting => StyleEntry {
            background: "bg-yellow-100 dark:bg-yellow-900",
            text: "text-yellow-800 dark:text-yellow-200",
        },
        HookCategory::Automation => StyleEntry {
            background: "bg-orange-100 dark:bg-orange-900",
            text: "text-orange-800 dark:text-orange-200",
        },
        HookCategory::Logging => StyleEntry {
            background: "bg-gray-100 dark:bg-gray-800",
            text: "text-gray-800 dark:text-gray-200",
        },
        HookCategory::Notification => StyleEntry {
            background: "bg-red-100 dark:bg-red-900",
            text: "text-red-800 dark:text-red-200",
        },
        HookCategory::Workflow => StyleEntry {
            background: "bg-indigo-100 dark:bg-indigo-900",
            text: "text-indigo-800 dark:text-indigo-200",
        },
        HookCategory::Other => StyleEntry {
            background: "bg-slate-100 dark:bg-slate-800",
            text: "text-slate-800 dark:text-slate-200",
        },
    }
}
