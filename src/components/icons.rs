//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuExternalLink as ExternalLink, LuMoon as Moon,
        LuSearch as Search, LuSun as Sun, LuWallet as Wallet,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronDown as ChevronDown, BsMoon as Moon,
        BsSearch as Search, BsSun as Sun, BsWallet2 as Wallet,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(MOON, Moon);
themed_icon!(SEARCH, Search);
themed_icon!(SUN, Sun);
themed_icon!(WALLET, Wallet);
