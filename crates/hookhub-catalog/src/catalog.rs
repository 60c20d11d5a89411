//! The immutable hook collection.

use std::collections::BTreeMap;
use std::sync::Arc;

use hookhub_core::AppResult;
use hookhub_entity::{Hook, HookCategory};

use crate::source::{CatalogSource, EMBEDDED_DATASET};
use crate::validate;

/// A validated, read-only hook collection.
///
/// Loaded once at startup. Cloning shares the underlying slice.
#[derive(Debug, Clone)]
pub struct HookCatalog {
    hooks: Arc<[Hook]>,
}

impl HookCatalog {
    /// Parse and validate dataset text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let hooks = validate::parse(json)?;
        Self::from_hooks(hooks)
    }

    /// Validate an already-built collection.
    pub fn from_hooks(hooks: Vec<Hook>) -> AppResult<Self> {
        validate::validate(&hooks)?;
        Ok(Self {
            hooks: hooks.into(),
        })
    }

    /// The dataset bundled into the binary.
    pub fn embedded() -> AppResult<Self> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Read, parse and validate the dataset from `source`.
    pub async fn load(source: &CatalogSource) -> AppResult<Self> {
        tracing::info!(source = %source, "Loading hook catalog");

        let text = source.read().await?;
        let catalog = Self::from_json(&text)?;

        if catalog.is_empty() {
            tracing::warn!(source = %source, "Hook catalog is empty; the grid will render no cards");
        } else {
            tracing::info!(hooks = catalog.len(), "Hook catalog loaded");
        }

        Ok(catalog)
    }

    /// All hooks in dataset order.
    pub fn hooks(&self) -> &[Hook] {
        &self.hooks
    }

    /// Look up a hook by id.
    pub fn get(&self, id: &str) -> Option<&Hook> {
        self.hooks.iter().find(|h| h.id == id)
    }

    /// Hooks in `category`, preserving dataset order.
    pub fn by_category(&self, category: HookCategory) -> Vec<&Hook> {
        self.hooks
            .iter()
            .filter(|h| h.category == category)
            .collect()
    }

    /// Number of hooks per category. Every category is present, possibly
    /// with a zero count.
    pub fn category_counts(&self) -> BTreeMap<HookCategory, usize> {
        let mut counts: BTreeMap<_, _> = HookCategory::ALL.into_iter().map(|c| (c, 0)).collect();
        for hook in self.hooks.iter() {
            *counts.entry(hook.category).or_default() += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookhub_core::error::ErrorKind;

    const TWO_HOOKS: &str = r#"[
        {"id":"b","name":"Bravo","category":"git","description":"second","githubUrl":"https://x.y/b"},
        {"id":"a","name":"Alpha","category":"testing","description":"first","githubUrl":"https://x.y/a"}
    ]"#;

    #[test]
    fn test_embedded_dataset_is_valid() {
        let catalog = HookCatalog::embedded().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_preserves_dataset_order() {
        let catalog = HookCatalog::from_json(TWO_HOOKS).unwrap();
        let ids: Vec<_> = catalog.hooks().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_get_and_filter() {
        let catalog = HookCatalog::from_json(TWO_HOOKS).unwrap();
        assert_eq!(catalog.get("a").map(|h| h.name.as_str()), Some("Alpha"));
        assert!(catalog.get("missing").is_none());

        let git = catalog.by_category(HookCategory::Git);
        assert_eq!(git.len(), 1);
        assert_eq!(git[0].id, "b");
        assert!(catalog.by_category(HookCategory::Other).is_empty());
    }

    #[test]
    fn test_category_counts_cover_every_category() {
        let catalog = HookCatalog::from_json(TWO_HOOKS).unwrap();
        let counts = catalog.category_counts();
        assert_eq!(counts.len(), HookCategory::ALL.len());
        assert_eq!(counts[&HookCategory::Git], 1);
        assert_eq!(counts[&HookCategory::Workflow], 0);
    }

    #[tokio::test]
    async fn test_load_embedded() {
        let catalog = HookCatalog::load(&CatalogSource::Embedded).await.unwrap();
        assert_eq!(catalog.len(), HookCatalog::embedded().unwrap().len());
    }

    #[test]
    fn test_malformed_dataset_is_fatal() {
        let err = HookCatalog::from_json(r#"[{"id":"1"}]"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Catalog);
    }
}
