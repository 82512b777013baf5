//! Custom hooks shared across components.

use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::DARK_MODE_CLASS;
use crate::core::rpc;
use crate::models::Theme;
use crate::utils::dom;

/// Theme signal wired to localStorage and the document root class.
///
/// Initial value: the persisted preference, else the system color-scheme
/// query. Every change writes back and toggles the dark class on `<html>`.
pub fn use_theme() -> RwSignal<Theme> {
    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let initial = Theme::load().unwrap_or_else(|| {
        if prefers_dark.get_untracked() {
            Theme::Dark
        } else {
            Theme::Light
        }
    });

    let theme = RwSignal::new(initial);
    Effect::new(move |_| {
        let current = theme.get();
        current.store();
        dom::set_root_class(DARK_MODE_CLASS, current.is_dark());
    });
    theme
}

/// Resolved SuiNS name for the connected address.
#[derive(Clone, Copy)]
pub struct SuiName {
    pub name: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
}

/// Resolve the SuiNS name whenever the connected address changes.
///
/// Resolution failures are swallowed inside [`rpc::resolve_name`]; the name
/// simply stays `None` and callers fall back to the raw address. Late
/// responses from a superseded connection are discarded via the request
/// epoch.
pub fn use_sui_name() -> SuiName {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let name = RwSignal::new(None);
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(address) = ctx.wallet.with(|w| w.address().map(str::to_string)) else {
            name.set(None);
            loading.set(false);
            return;
        };

        let epoch = ctx.current_epoch();
        loading.set(true);
        spawn_local(async move {
            let resolved = rpc::resolve_name(&address).await;
            if ctx.is_current(epoch) {
                name.set(resolved);
                loading.set(false);
            }
        });
    });

    SuiName { name, loading }
}
