//! Transaction history panel, grouped by calendar date.

mod hook;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::CollapsibleCard;
use crate::components::icons as ic;
use crate::config::explorer;
use crate::core::{DateGroup, group_by_date};
use crate::models::{TransactionRecord, TxStatus};
use crate::utils::format::{format_time_label, truncate_digest};
use hook::use_transactions;

stylance::import_crate_style!(css, "src/components/history/history.module.css");

#[component]
pub fn TransactionHistory() -> impl IntoView {
    let query = use_transactions();

    let groups = Memo::new(move |_| query.transactions.with(|txs| group_by_date(txs)));

    let body = move || {
        if query.loading.get() {
            view! { <div class=css::loading>"Loading..."</div> }.into_any()
        } else if let Some(message) = query.error.get() {
            view! { <div class=css::errorMessage>{message}</div> }.into_any()
        } else if groups.with(|g| g.is_empty()) {
            view! {
                <div class=css::emptyState>
                    <p>"No transactions found"</p>
                    <small>"Your transaction history will appear here"</small>
                </div>
            }
            .into_any()
        } else {
            view! {
                <For
                    each=move || groups.get()
                    key=|group| group.date_label.clone()
                    children=move |group| view! { <TransactionGroup group=group /> }
                />
            }
            .into_any()
        }
    };

    view! {
        <CollapsibleCard title="Transaction History">
            <div class=css::transactionList>{body}</div>
        </CollapsibleCard>
    }
}

#[component]
fn TransactionGroup(group: DateGroup) -> impl IntoView {
    let transactions = group.transactions.clone();
    view! {
        <div class=css::group>
            <div class=css::groupDate>{group.date_label.clone()}</div>
            <For
                each=move || transactions.clone()
                key=|tx| tx.digest.clone()
                children=move |tx| view! { <TransactionRow tx=tx /> }
            />
        </div>
    }
}

#[component]
fn TransactionRow(tx: TransactionRecord) -> impl IntoView {
    let status = tx.status();
    let status_class = match status {
        TxStatus::Success => css::statusSuccess,
        TxStatus::Failure => css::statusFailure,
        TxStatus::Pending => css::statusPending,
        TxStatus::Unknown => css::statusUnknown,
    };
    let time = format_time_label(tx.timestamp_ms);
    let has_time = !time.is_empty();
    let explorer_url = explorer::txblock_url(&tx.digest);

    view! {
        <div class=css::item>
            <div class=css::itemHeader>
                <div class=css::itemInfo>
                    <span class=css::digest>{truncate_digest(&tx.digest)}</span>
                    <span class=format!("{} {}", css::status, status_class)>
                        <span class=css::statusIcon>{status.icon()}</span>
                        {status.label()}
                    </span>
                </div>
                <Show when=move || has_time>
                    <span class=css::time>{time.clone()}</span>
                </Show>
            </div>
            <div class=css::itemDetails>
                <span class=css::kind>{tx.kind_label().to_string()}</span>
                <a
                    class=css::link
                    href=explorer_url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span>"View in Explorer"</span>
                    <span class=css::linkIcon><Icon icon=ic::EXTERNAL_LINK /></span>
                </a>
            </div>
        </div>
    }
}
