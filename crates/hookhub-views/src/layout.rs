//! HTML document shell.

use maud::{DOCTYPE, Markup, html};

/// Wrap `body` in a full HTML document.
///
/// An empty `stylesheet_url` omits the Tailwind script tag.
pub fn layout(title: &str, stylesheet_url: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if !stylesheet_url.is_empty() {
                    script src=(stylesheet_url) {}
                }
            }
            body class="antialiased" {
                (body)
            }
        }
    }
}
