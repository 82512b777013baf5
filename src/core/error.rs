//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`WalletError`] - injected Sui wallet connection and request errors
//! - [`FetchError`] - network/fetch-related errors for HTTP requests
//! - [`RpcError`] - JSON-RPC call failures against the fullnode

use std::fmt;

/// Wallet-related errors for the injected Sui wallet provider.
#[derive(Debug, Clone)]
pub enum WalletError {
    /// Browser window not available
    NoWindow,
    /// No Sui wallet extension injected into the page
    NotInstalled,
    /// Request to wallet was rejected by user
    RequestRejected(String),
    /// Wallet granted no permissions
    PermissionDenied,
    /// No account returned from wallet
    NoAccount,
    /// Wallet did not answer within the configured timeout
    Timeout,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NotInstalled => write!(
                f,
                "Sui wallet not installed. Please install a Sui wallet extension."
            ),
            Self::RequestRejected(msg) => write!(f, "Wallet request rejected: {}", msg),
            Self::PermissionDenied => write!(f, "Wallet permission request was denied"),
            Self::NoAccount => write!(f, "No account returned from wallet"),
            Self::Timeout => write!(f, "Wallet did not respond in time"),
        }
    }
}

impl std::error::Error for WalletError {}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (timeout, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// JSON parsing error
    JsonParseError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// JSON-RPC call failures against the fullnode.
#[derive(Debug, Clone)]
pub enum RpcError {
    /// Transport-level failure
    Fetch(FetchError),
    /// Error object returned by the node
    Node { code: i64, message: String },
    /// Response carried neither a result nor an error
    MissingResult,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "RPC transport error: {}", err),
            Self::Node { code, message } => write!(f, "RPC error {}: {}", code, message),
            Self::MissingResult => write!(f, "RPC response missing result"),
        }
    }
}

impl std::error::Error for RpcError {}

impl From<FetchError> for RpcError {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err)
    }
}
