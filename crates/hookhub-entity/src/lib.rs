//! # hookhub-entity
//!
//! Domain models for HookHub. A [`Hook`] is one catalog entry and a
//! [`HookCategory`] is the closed classification applied to it. All
//! entities derive `Debug`, `Clone`, `Serialize` and `Deserialize`.

pub mod hook;

pub use hook::{Hook, HookCategory};
