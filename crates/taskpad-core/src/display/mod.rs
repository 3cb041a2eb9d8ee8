//! Display formatting for snapshots and operation results.
//!
//! Rendering is a pure consumer of [`crate::models::AppState`]: nothing in
//! this module mutates state. Output is markdown so the CLI can hand it to
//! its terminal renderer unchanged.
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: list wrappers ([`TaskSummaries`])
//! - [`status`]: confirmation and status messages ([`OperationStatus`])
//!
//! ```rust
//! use taskpad_core::{display::TaskSummaries, models::{AppState, Theme}};
//!
//! let state = AppState::seeded(Theme::Light);
//! let output = TaskSummaries::from(&state).to_string();
//! assert!(output.contains("Default Task"));
//! ```

pub mod collections;
pub mod models;
pub mod status;

pub use collections::TaskSummaries;
pub use status::OperationStatus;
