//! # hookhub-views
//!
//! Server-rendered HTML for the catalog page, built with `maud`.
//!
//! Components are plain functions from data to [`maud::Markup`], composed
//! leaf-first: style table, badge, card, grid, header, page.

pub mod badge;
pub mod card;
pub mod grid;
pub mod header;
pub mod layout;
pub mod page;
pub mod style;

pub use badge::category_badge;
pub use card::hook_card;
pub use grid::hook_grid;
pub use header::page_header;
pub use layout::layout;
pub use page::{home_page, render_catalog_page};
pub use style::{StyleEntry, category_style};
