//! Catalog page composition.

use hookhub_catalog::HookCatalog;
use hookhub_core::config::RenderConfig;
use hookhub_entity::Hook;
use maud::{Markup, html};

use crate::grid::hook_grid;
use crate::header::page_header;
use crate::layout::layout;

/// Header followed by the hook grid, inside the document shell.
pub fn home_page(hooks: &[Hook], config: &RenderConfig) -> Markup {
    let body = html! {
        div class="min-h-screen bg-white dark:bg-black" {
            main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12" {
                (page_header())
                (hook_grid(hooks))
            }
        }
    };

    layout(&config.title, &config.stylesheet_url, body)
}

/// Render the full page for `catalog` to an HTML string.
pub fn render_catalog_page(catalog: &HookCatalog, config: &RenderConfig) -> String {
    let html = home_page(catalog.hooks(), config).into_string();
    tracing::debug!(hooks = catalog.len(), bytes = html.len(), "Rendered catalog page");
    html
}
