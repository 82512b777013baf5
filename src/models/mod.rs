//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ChainObject`], [`ObjectEnvelope`] - on-chain object wire shapes
//! - [`ClassifiedItem`] - classified fungible/NFT assets
//! - [`TransactionRecord`], [`TxStatus`] - transaction history entries
//! - [`WalletState`] - wallet connection state
//! - [`Theme`] - persisted light/dark preference

mod item;
mod object;
mod theme;
mod transaction;
mod wallet;

pub use item::ClassifiedItem;
pub use object::{ChainObject, ObjectEnvelope};
pub use theme::Theme;
pub use transaction::{TransactionRecord, TxStatus};
pub use wallet::WalletState;
