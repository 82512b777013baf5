//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`post_json`] - JSON POST over the Fetch API
//! - [`race_with_timeout`] - promise/timeout racing for wallet calls
//! - [`dom`] - window/document/localStorage access
//! - [`format`] - date, balance, and truncation formatting

pub mod dom;
pub mod fetch;
pub mod format;

pub use fetch::{RaceResult, post_json, race_with_timeout};
