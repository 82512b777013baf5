//! Network fetching utilities.
//!
//! Provides an async JSON POST helper built on the Fetch API, plus a
//! reusable promise/timeout race for wallet calls.

use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use js_sys::Promise;
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// This is a reusable utility for implementing timeout behavior on any
/// JavaScript Promise.
///
/// # Arguments
/// * `promise` - The promise to race against timeout
/// * `timeout_ms` - Timeout duration in milliseconds
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: u32) -> RaceResult {
    let request = JsFuture::from(promise);
    let timeout = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(request);
    futures::pin_mut!(timeout);

    match select(request, timeout).await {
        Either::Left((Ok(value), _)) => RaceResult::Completed(value),
        Either::Left((Err(err), _)) => RaceResult::Error(
            err.as_string()
                .unwrap_or_else(|| "Unknown error".to_string()),
        ),
        Either::Right(_) => RaceResult::TimedOut,
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// POST a JSON body to a URL and parse the JSON response.
///
/// No timeout is enforced here; chain RPC calls rely on the transport's
/// own behavior.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let text = post_url(url, body).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// POST a JSON body using the Fetch API and return the response text.
async fn post_url<B: Serialize>(url: &str, body: &B) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let payload =
        serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(headers.as_ref());
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::NetworkError(e.as_string().unwrap_or_else(|| "fetch failed".to_string()))
        })?;

    let resp: Response = result
        .dyn_into()
        .map_err(|_| FetchError::ResponseReadFailed)?;

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::ResponseReadFailed)
}
