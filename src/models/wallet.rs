use crate::utils::format::truncate_address;

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: String,
    },
}

impl WalletState {
    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    /// Get the connected address, if any
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    /// Format the account for display (0x1234...5678)
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected { address } => truncate_address(address),
            WalletState::Connecting => "Connecting...".to_string(),
            WalletState::Disconnected => "Guest".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_state() {
        let state = WalletState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.display_name(), "Guest");
    }

    #[test]
    fn test_connecting_state() {
        let state = WalletState::Connecting;
        assert!(!state.is_connected());
        assert_eq!(state.address(), None);
        assert_eq!(state.display_name(), "Connecting...");
    }

    #[test]
    fn test_connected_state() {
        let state = WalletState::Connected {
            address: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
        };
        assert!(state.is_connected());
        assert_eq!(
            state.address(),
            Some("0x1234567890abcdef1234567890abcdef12345678")
        );
        assert_eq!(state.display_name(), "0x1234...5678");
    }

    #[test]
    fn test_connected_short_address() {
        let state = WalletState::Connected {
            address: "0x1234".to_string(),
        };
        assert!(state.is_connected());
        assert_eq!(state.display_name(), "0x1234");
    }

    #[test]
    fn test_default() {
        let state = WalletState::default();
        assert_eq!(state, WalletState::Disconnected);
    }
}
