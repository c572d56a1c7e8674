//! Command handler layer.
//!
//! ## Files
//! - `collect.rs` — namespace/action catalog collection.
//! - `check.rs` — catalog filtering, access estimation and results export.
//!
//! Each handler returns `Ok(false)` when the parsed command is not its own.
//! Business logic lives in `services/*`.

pub mod check;
pub mod collect;

pub use check::handle_check_command;
pub use collect::handle_collect_command;
