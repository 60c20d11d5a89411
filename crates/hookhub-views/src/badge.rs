//! Category badge.

use hookhub_entity::HookCategory;
use maud::{Markup, html};

use crate::style::category_style;

const BADGE_BASE: &str = "inline-block px-3 py-1 text-sm font-medium rounded-full";

/// A pill showing the category tag in its color.
pub fn category_badge(category: HookCategory) -> Markup {
    let style = category_style(category);

    html! {
        span class={ (BADGE_BASE) " " (style.background) " " (style.text) } {
            (category.as_str())
        }
    }
}
