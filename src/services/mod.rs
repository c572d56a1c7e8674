//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `collector.rs` — namespace and action catalog walk.
//! - `scopes.rs` — `--scope` expansion into directory scope ids.
//! - `checker.rs` — filtering, batching and baseline comparison.
//! - `baseline.rs` — default decision table from `default_results.csv`.
//! - `storage.rs` — catalog JSON and results CSV persistence.
//! - `config.rs` — settings file and flag resolution.
//! - `output.rs` — console output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod baseline;
pub mod checker;
pub mod collector;
pub mod config;
pub mod output;
pub mod scopes;
pub mod storage;
