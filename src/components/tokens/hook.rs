//! Owned-object fetch, enrichment, and classification pipeline.

use futures::future::join_all;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::error::RpcError;
use crate::core::{classify, rpc};
use crate::models::{ChainObject, ClassifiedItem};

/// Reactive result of the token pipeline.
#[derive(Clone, Copy)]
pub struct TokenQuery {
    /// Classified items in display order (fungible aggregates, then NFTs).
    pub items: RwSignal<Vec<ClassifiedItem>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

/// Fetch and classify the connected account's objects, re-running on every
/// wallet transition. Late responses from a superseded connection are
/// dropped via the request epoch.
pub fn use_owned_tokens() -> TokenQuery {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let items = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None);

    Effect::new(move |_| {
        let Some(address) = ctx.wallet.with(|w| w.address().map(str::to_string)) else {
            items.set(Vec::new());
            loading.set(false);
            error.set(None);
            return;
        };

        let epoch = ctx.current_epoch();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = fetch_classified(&address).await;
            if !ctx.is_current(epoch) {
                return;
            }
            match result {
                Ok(classified) => items.set(classified),
                Err(err) => {
                    web_sys::console::error_1(&format!("Token fetch failed: {err}").into());
                    error.set(Some(
                        "Failed to load tokens. Please try again later.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    TokenQuery {
        items,
        loading,
        error,
    }
}

/// Enumerate owned objects, enrich each with a detail fetch, then classify.
///
/// The enrichment join is all-or-nothing: classification waits for every
/// detail call, but a single failure only degrades that object to its
/// enumeration envelope.
async fn fetch_classified(address: &str) -> Result<Vec<ClassifiedItem>, RpcError> {
    let objects = rpc::get_owned_objects(address).await?;
    let enriched: Vec<ChainObject> = join_all(objects.into_iter().map(enrich)).await;
    Ok(classify(&enriched).into_items())
}

async fn enrich(object: ChainObject) -> ChainObject {
    match rpc::get_object(&object.object_id).await {
        Ok(detail) => detail,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("Detail fetch failed for {}: {err}", object.object_id).into(),
            );
            object
        }
    }
}
