//! Wallet information panel.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::CollapsibleCard;
use crate::components::hooks::use_sui_name;
use crate::config::NETWORK_NAME;

stylance::import_crate_style!(css, "src/components/wallet_info.module.css");

/// Connected account summary: SuiNS name (when resolved), full address, and
/// the configured network label.
#[component]
pub fn WalletInfo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sui_name = use_sui_name();

    let address = Signal::derive(move || {
        ctx.wallet
            .with(|w| w.address().map(str::to_string))
            .unwrap_or_default()
    });

    let address_display = move || {
        if sui_name.loading.get() {
            view! { <span>"Loading..."</span> }.into_any()
        } else {
            view! {
                <span class=css::addressBlock>
                    {move || sui_name.name.get().map(|name| view! {
                        <span class=css::suinsName>{name}</span>
                    })}
                    <span class=css::address>{address}</span>
                </span>
            }
            .into_any()
        }
    };

    view! {
        <CollapsibleCard title="Wallet Information">
            <div class=css::details>
                <p class=css::row>
                    <span class=css::rowLabel>"Address:"</span>
                    {address_display}
                </p>
                <p class=css::row>
                    <span class=css::rowLabel>"Network:"</span>
                    <span>{NETWORK_NAME}</span>
                </p>
            </div>
        </CollapsibleCard>
    }
}
