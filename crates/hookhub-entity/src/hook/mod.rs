//! Hook domain entities.

pub mod category;
pub mod model;

pub use category::HookCategory;
pub use model::Hook;
