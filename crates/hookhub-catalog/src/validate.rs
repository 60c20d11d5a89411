//! Dataset parsing and integrity checks.

use std::collections::HashSet;

use hookhub_core::AppResult;
use hookhub_core::error::{AppError, ErrorKind};
use hookhub_entity::Hook;
use url::Url;

/// Parse dataset text into hooks, rejecting any record that does not match
/// the hook shape or names an unknown category.
pub fn parse(json: &str) -> AppResult<Vec<Hook>> {
    serde_json::from_str(json).map_err(|e| {
        AppError::with_source(
            ErrorKind::Catalog,
            format!("Malformed hook dataset: {e}"),
            e,
        )
    })
}

/// Check the invariants the renderers rely on.
///
/// Ids and names are non-empty, ids are unique, and every link is an
/// absolute `http`/`https` URL.
pub fn validate(hooks: &[Hook]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(hooks.len());

    for (index, hook) in hooks.iter().enumerate() {
        if hook.id.trim().is_empty() {
            return Err(AppError::catalog(format!(
                "Hook at index {index} has an empty id"
            )));
        }
        if hook.name.trim().is_empty() {
            return Err(AppError::catalog(format!(
                "Hook '{}' has an empty name",
                hook.id
            )));
        }
        if !seen.insert(hook.id.as_str()) {
            return Err(AppError::catalog(format!(
                "Duplicate hook id '{}' at index {index}",
                hook.id
            )));
        }
        check_url(hook)?;
    }

    Ok(())
}

fn check_url(hook: &Hook) -> AppResult<()> {
    let url = Url::parse(&hook.github_url).map_err(|e| {
        AppError::with_source(
            ErrorKind::Catalog,
            format!("Hook '{}' has an invalid URL '{}': {e}", hook.id, hook.github_url),
            e,
        )
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::catalog(format!(
            "Hook '{}' links to unsupported scheme '{other}'",
            hook.id
        ))),
    }
}
