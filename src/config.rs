//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "SuiConnect";

// =============================================================================
// Network Configuration
// =============================================================================

/// Sui fullnode JSON-RPC endpoint.
pub const RPC_URL: &str = "https://fullnode.mainnet.sui.io/";

/// Network label shown in the wallet info panel.
pub const NETWORK_NAME: &str = "Sui Mainnet";

/// Page size for the owned-object enumeration (first page only).
pub const OWNED_OBJECTS_LIMIT: u32 = 50;

/// Page size for the transaction query (first page only).
pub const TRANSACTIONS_LIMIT: u32 = 20;

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Wallet permission request timeout in milliseconds.
pub const WALLET_TIMEOUT_MS: u32 = 2000;

/// Name of the injected wallet provider object on `window`.
pub const WALLET_PROVIDER_KEY: &str = "suiWallet";

// =============================================================================
// Token Classification
// =============================================================================

/// Type-tag markers that identify known fungible tokens.
pub const FUNGIBLE_TYPE_MARKERS: &[&str] = &["::sui::SUI", "::koto::KOTO"];

/// Bundled fallback images for known tokens, matched by type-tag marker.
pub const KNOWN_TOKEN_IMAGES: &[(&str, &str)] = &[
    ("::sui::SUI", "/images/sui.png"),
    ("::koto::KOTO", "/images/koto.png"),
];

// =============================================================================
// Theme Configuration
// =============================================================================

/// localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on the document root in dark mode.
pub const DARK_MODE_CLASS: &str = "dark";

// =============================================================================
// Display Configuration
// =============================================================================

/// Truncation widths for addresses and digests.
pub mod display {
    /// Leading characters kept when truncating an address.
    pub const ADDRESS_PREFIX_LEN: usize = 6;
    /// Trailing characters kept when truncating an address.
    pub const ADDRESS_SUFFIX_LEN: usize = 4;
    /// Leading characters kept when truncating a transaction digest.
    pub const DIGEST_PREFIX_LEN: usize = 8;
    /// Trailing characters kept when truncating a transaction digest.
    pub const DIGEST_SUFFIX_LEN: usize = 6;
}

// =============================================================================
// Block Explorer
// =============================================================================

/// Block explorer link builders.
pub mod explorer {
    /// Explorer base URL.
    pub const BASE_URL: &str = "https://suiexplorer.com";

    /// Network query parameter appended to every explorer link.
    pub const NETWORK: &str = "mainnet";

    /// Explorer page for an object id.
    pub fn object_url(object_id: &str) -> String {
        format!("{BASE_URL}/object/{object_id}?network={NETWORK}")
    }

    /// Explorer page for a transaction digest.
    pub fn txblock_url(digest: &str) -> String {
        format!("{BASE_URL}/txblock/{digest}?network={NETWORK}")
    }
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explorer_urls_carry_network_param() {
        assert_eq!(
            explorer::object_url("0xabc"),
            "https://suiexplorer.com/object/0xabc?network=mainnet"
        );
        assert_eq!(
            explorer::txblock_url("Digest123"),
            "https://suiexplorer.com/txblock/Digest123?network=mainnet"
        );
    }
}
