//! Wallet connect control.
//!
//! Disconnected: a connect button driving the injected-provider handshake.
//! Connected: a button showing the SuiNS name (or truncated address) that
//! opens a dropdown with the full address and a Disconnect action.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::on_click_outside;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::hooks::use_sui_name;
use crate::components::icons as ic;
use crate::core::wallet;
use crate::models::WalletState;

stylance::import_crate_style!(css, "src/components/connect.module.css");

#[component]
pub fn ConnectButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let sui_name = use_sui_name();
    let (dropdown_open, set_dropdown_open) = signal(false);

    // Clicks anywhere outside the button/dropdown wrapper dismiss the menu.
    let wrapper_ref = NodeRef::<Div>::new();
    let _ = on_click_outside(wrapper_ref, move |_| set_dropdown_open.set(false));

    let connected = Signal::derive(move || ctx.wallet.with(|w| w.is_connected()));
    let connecting =
        Signal::derive(move || ctx.wallet.with(|w| matches!(w, WalletState::Connecting)));
    let full_address = Signal::derive(move || {
        ctx.wallet
            .with(|w| w.address().map(str::to_string))
            .unwrap_or_default()
    });

    // SuiNS name when resolved, truncated address otherwise.
    let display_label = Signal::derive(move || {
        if sui_name.loading.get() {
            "Loading...".to_string()
        } else {
            sui_name
                .name
                .get()
                .unwrap_or_else(|| ctx.wallet.with(|w| w.display_name()))
        }
    });

    let on_connect = move |_: leptos::ev::MouseEvent| {
        if connecting.get_untracked() {
            return;
        }
        ctx.set_wallet(WalletState::Connecting);
        spawn_local(async move {
            match wallet::connect().await {
                Ok(address) => ctx.set_wallet(WalletState::Connected { address }),
                Err(err) => {
                    web_sys::console::warn_1(&format!("Wallet connect failed: {err}").into());
                    ctx.set_wallet(WalletState::Disconnected);
                }
            }
        });
    };

    let on_disconnect = move |_: leptos::ev::MouseEvent| {
        set_dropdown_open.set(false);
        ctx.set_wallet(WalletState::Disconnected);
    };

    let chevron_class = move || {
        if dropdown_open.get() {
            format!("{} {}", css::chevron, css::chevronOpen)
        } else {
            css::chevron.to_string()
        }
    };

    view! {
        <Show
            when=move || connected.get()
            fallback=move || view! {
                <button
                    class=css::connectButton
                    on:click=on_connect
                    disabled=move || connecting.get()
                >
                    <span class=css::walletIcon><Icon icon=ic::WALLET /></span>
                    {move || if connecting.get() { "Connecting..." } else { "Connect Wallet" }}
                </button>
            }
        >
            <div class=css::wrapper node_ref=wrapper_ref>
                <button
                    class=css::connectButton
                    on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                >
                    <span class=css::label>{display_label}</span>
                    <span class=chevron_class><Icon icon=ic::CHEVRON_DOWN /></span>
                </button>
                <Show when=move || dropdown_open.get()>
                    <div class=css::dropdown>
                        <div class=css::dropdownAddress>
                            {move || sui_name.name.get().map(|name| view! {
                                <span class=css::dropdownName>{name}</span>
                            })}
                            <span class=css::dropdownFull>{full_address}</span>
                        </div>
                        <button class=css::disconnectButton on:click=on_disconnect>
                            "Disconnect"
                        </button>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
