//! Shared data model layer (types/constants only).
//!
//! ## Files
//! - `models.rs` — catalog, decision and result-row types.
//! - `constants.rs` — endpoint paths, file names and batch sizes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `Catalog` and `ResultRow` define the on-disk layout of `collected_actions.json`
//! and `action_results.csv`. Keep them in sync with `docs/contracts/*`.

pub mod constants;
pub mod models;
