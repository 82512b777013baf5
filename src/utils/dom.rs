//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a string value from localStorage.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a string value to localStorage (best-effort).
pub fn storage_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// Toggle a class on the document root element (`<html>`).
///
/// Used for theme switching; no-op outside a browser context.
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(document) = document()
        && let Some(root) = document.document_element()
    {
        let class_list = root.class_list();
        let _ = if enabled {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
    }
}
