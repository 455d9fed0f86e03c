//! Core logic for the inventory builder service.
//!
//! Everything here is request-scoped and filesystem-backed: the category
//! tree and role catalog are re-read on every call so responses always
//! reflect the on-disk state. The HTTP layer lives in `invgen_server`.

pub mod catalog;
pub mod categories;
pub mod config;
pub mod error;
pub mod inventory;
pub mod resolver;
