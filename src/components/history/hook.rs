//! Transaction history fetch pipeline.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::rpc;
use crate::models::TransactionRecord;

/// Reactive result of the transaction query.
#[derive(Clone, Copy)]
pub struct TransactionQuery {
    pub transactions: RwSignal<Vec<TransactionRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

/// Fetch the recent transactions of the connected account, re-running on
/// every wallet transition. Stale responses are dropped via the request
/// epoch.
pub fn use_transactions() -> TransactionQuery {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transactions = RwSignal::new(Vec::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None);

    Effect::new(move |_| {
        let Some(address) = ctx.wallet.with(|w| w.address().map(str::to_string)) else {
            transactions.set(Vec::new());
            loading.set(false);
            error.set(None);
            return;
        };

        let epoch = ctx.current_epoch();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = rpc::query_transaction_blocks(&address).await;
            if !ctx.is_current(epoch) {
                return;
            }
            match result {
                Ok(records) => transactions.set(records),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Transaction fetch failed: {err}").into(),
                    );
                    error.set(Some(
                        "Failed to load transaction history. Please try again later.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    TransactionQuery {
        transactions,
        loading,
        error,
    }
}
