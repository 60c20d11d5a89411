//! Card grid.

use hookhub_entity::Hook;
use maud::{Markup, html};

use crate::card::hook_card;

const GRID_CLASSES: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 2xl:grid-cols-4 gap-6";

/// Lay out one card per hook in input order.
///
/// An empty slice renders an empty container; there is no placeholder.
pub fn hook_grid(hooks: &[Hook]) -> Markup {
    html! {
        div class=(GRID_CLASSES) data-hook-count=(hooks.len()) {
            @for hook in hooks {
                (hook_card(hook))
            }
        }
    }
}
