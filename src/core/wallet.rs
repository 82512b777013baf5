//! Wallet connection logic using web-sys.
//!
//! Drives the browser-injected Sui wallet provider through direct
//! JavaScript interop via the Reflect API. The legacy injected API exposes
//! no revoke call and no change events: connect and in-app disconnect are
//! the only transitions.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::config::{WALLET_PROVIDER_KEY, WALLET_TIMEOUT_MS};
use crate::core::error::WalletError;
use crate::utils::{RaceResult, dom, race_with_timeout};

/// Get the injected wallet provider object from `window`.
fn get_provider() -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &WALLET_PROVIDER_KEY.into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

/// Look up a method on the provider object.
fn provider_method(provider: &Object, name: &str) -> Result<Function, WalletError> {
    Reflect::get(provider, &name.into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or_else(|| WalletError::RequestRejected(format!("wallet exposes no {name}()")))
}

/// Call a zero-argument provider method, racing the returned promise
/// against the wallet timeout so an unresponsive extension cannot wedge
/// the connect flow.
async fn wallet_request(name: &str) -> Result<JsValue, WalletError> {
    let provider = get_provider()?;
    let method = provider_method(&provider, name)?;
    let promise: Promise = method
        .call0(&provider)
        .map_err(|e| WalletError::RequestRejected(format!("{e:?}")))?
        .into();

    match race_with_timeout(promise, WALLET_TIMEOUT_MS).await {
        RaceResult::Completed(value) => Ok(value),
        RaceResult::TimedOut => Err(WalletError::Timeout),
        RaceResult::Error(message) => Err(WalletError::RequestRejected(message)),
    }
}

/// Request permissions and return the first account address.
pub async fn connect() -> Result<String, WalletError> {
    let granted = wallet_request("requestPermissions").await?;
    if granted.is_falsy() {
        return Err(WalletError::PermissionDenied);
    }

    let accounts = wallet_request("getAccounts").await?;
    let accounts: Vec<String> =
        serde_wasm_bindgen::from_value(accounts).map_err(|_| WalletError::NoAccount)?;
    accounts.into_iter().next().ok_or(WalletError::NoAccount)
}
