//! Page banner.

use maud::{Markup, html};

pub const SITE_NAME: &str = "HookHub";
pub const TAGLINE: &str = "Discover Claude Code Hooks";
pub const INTRO: &str = "Browse our curated collection of open-source Claude Code hooks to automate your development workflow.";

/// The static page header.
pub fn page_header() -> Markup {
    html! {
        header class="mb-12" {
            h1 class="text-4xl font-bold mb-2 text-gray-900 dark:text-gray-100" {
                (SITE_NAME)
            }
            p class="text-xl text-gray-700 dark:text-gray-300 mb-4" {
                (TAGLINE)
            }
            p class="text-base text-gray-600 dark:text-gray-400 max-w-3xl" {
                (INTRO)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_constant() {
        let html = page_header().into_string();
        assert_eq!(html, page_header().into_string());
        assert!(html.contains(">HookHub</h1>"));
        assert!(html.contains(TAGLINE));
        assert!(html.contains(INTRO));
    }
}
