//! UI components built with Leptos.
//!
//! - [`CollapsibleCard`] - expandable panel shell shared by all sections
//! - [`ConnectButton`] - wallet connect control with account dropdown
//! - [`WalletInfo`] - connected account summary panel
//! - [`TokenList`] - token/NFT panel with search, filter, and sort
//! - [`TransactionHistory`] - date-grouped transaction panel
//! - [`hooks`] - shared stateful logic (theme, SuiNS resolution)
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod card;
pub mod connect;
pub mod history;
pub mod hooks;
pub mod icons;
pub mod tokens;
pub mod wallet_info;

pub use card::CollapsibleCard;
pub use connect::ConnectButton;
pub use history::TransactionHistory;
pub use hooks::use_theme;
pub use tokens::TokenList;
pub use wallet_info::WalletInfo;
