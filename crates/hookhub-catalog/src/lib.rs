//! # hookhub-catalog
//!
//! Loads the static hook dataset, validates it, and exposes it as an
//! immutable [`HookCatalog`] shared by every renderer.
//!
//! A malformed dataset is fatal: loading returns an
//! [`ErrorKind::Catalog`](hookhub_core::error::ErrorKind::Catalog) error and
//! nothing partial is ever handed out.

pub mod catalog;
pub mod source;
pub mod validate;

pub use catalog::HookCatalog;
pub use source::CatalogSource;
