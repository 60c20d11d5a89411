//! Hook card.

use hookhub_entity::Hook;
use maud::{Markup, html};

use crate::badge::category_badge;

/// One catalog entry: name, badge, description and an outbound link.
///
/// The link opens in a new browsing context and never navigates the
/// catalog page itself.
pub fn hook_card(hook: &Hook) -> Markup {
    html! {
        article
            class="flex flex-col h-full p-6 bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 rounded-lg shadow-sm hover:shadow-md transition-shadow"
            data-hook-id=(hook.id)
        {
            div class="flex items-start justify-between gap-4 mb-3" {
                h2 class="text-xl font-semibold text-gray-900 dark:text-gray-100" {
                    (hook.name)
                }
                (category_badge(hook.category))
            }
            p class="flex-grow mb-4 text-base text-gray-700 dark:text-gray-300" {
                (hook.description)
            }
            a
                href=(hook.github_url)
                target="_blank"
                rel="noopener noreferrer"
                aria-label={ "View " (hook.name) " on GitHub" }
                class="inline-flex items-center text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline"
            {
                "View on GitHub →"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookhub_entity::HookCategory;

    fn auto_format() -> Hook {
        Hook {
            id: "1".to_string(),
            name: "Auto-Format".to_string(),
            category: HookCategory::Formatting,
            description: "Formats code on save.".to_string(),
            github_url: "https://github.com/x/y".to_string(),
        }
    }

    #[test]
    fn test_card_embeds_fields_verbatim() {
        let html = hook_card(&auto_format()).into_string();

        assert!(html.contains(">Auto-Format</h2>"));
        assert!(html.contains(">Formats code on save.</p>"));
        assert!(html.contains(">formatting</span>"));
        assert!(html.contains(r#"data-hook-id="1""#));
    }

    #[test]
    fn test_card_link_opens_new_context() {
        let html = hook_card(&auto_format()).into_string();

        assert!(html.contains(r#"href="https://github.com/x/y""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_card_escapes_markup() {
        let mut hook = auto_format();
        hook.description = "Wraps <script> & friends".to_string();
        let html = hook_card(&hook).into_string();

        assert!(html.contains("Wraps &lt;script&gt; &amp; friends"));
        assert!(!html.contains("<script>"));
    }
}
