//! Core domain logic for the dashboard.
//!
//! This module provides:
//! - [`classify`] fungible/NFT partition with balance aggregation
//! - [`derive_view`] search/filter/sort derivation for the token list
//! - [`group_by_date`] calendar grouping of transaction history
//! - [`rpc`] read-only JSON-RPC calls against the fullnode
//! - [`wallet`] injected wallet provider adapter

pub mod classifier;
pub mod error;
pub mod history;
pub mod rpc;
pub mod view;
pub mod wallet;

pub use classifier::classify;
pub use history::{DateGroup, group_by_date};
pub use view::{SortKey, TypeFilter, ViewOptions, available_filter_types, derive_view};
