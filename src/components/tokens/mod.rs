//! Token and NFT panel with search, filter, and sort controls.

mod hook;
mod item;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::CollapsibleCard;
use crate::components::icons as ic;
use crate::core::{SortKey, TypeFilter, ViewOptions, available_filter_types, derive_view};
use hook::use_owned_tokens;
use item::TokenRow;

stylance::import_crate_style!(css, "src/components/tokens/tokens.module.css");

#[component]
pub fn TokenList() -> impl IntoView {
    let query = use_owned_tokens();

    let (search, set_search) = signal(String::new());
    let (filter, set_filter) = signal(TypeFilter::All);
    let (sort, set_sort) = signal(SortKey::Name);

    let filter_types = Memo::new(move |_| query.items.with(|items| available_filter_types(items)));
    let view_items = Memo::new(move |_| {
        let opts = ViewOptions {
            search: search.get(),
            filter: filter.get(),
            sort: sort.get(),
        };
        query.items.with(|items| derive_view(items, &opts))
    });

    let body = move || {
        if query.loading.get() {
            view! { <div class=css::loading>"Loading..."</div> }.into_any()
        } else if let Some(message) = query.error.get() {
            view! { <div class=css::errorMessage>{message}</div> }.into_any()
        } else if view_items.with(|items| items.is_empty()) {
            view! {
                <div class=css::emptyState>
                    <p>"No tokens found"</p>
                    <small>"Connect your wallet to view your tokens"</small>
                </div>
            }
            .into_any()
        } else {
            view! {
                <For
                    each=move || view_items.get()
                    key=|item| item.key()
                    children=move |item| view! { <TokenRow item=item /> }
                />
            }
            .into_any()
        }
    };

    view! {
        <CollapsibleCard title="Tokens & NFTs">
            <div class=css::controls>
                <div class=css::searchBar>
                    <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                    <input
                        class=css::searchInput
                        type="text"
                        placeholder="Search tokens..."
                        prop:value=search
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <div class=css::filterControls>
                    <select
                        class=css::select
                        on:change=move |ev| set_filter.set(TypeFilter::parse(&event_target_value(&ev)))
                    >
                        <option value="all">"All Types"</option>
                        <For
                            each=move || filter_types.get()
                            key=|module| module.clone()
                            children=move |module| {
                                view! { <option value=module.clone()>{module.clone()}</option> }
                            }
                        />
                    </select>
                    <select
                        class=css::select
                        on:change=move |ev| set_sort.set(SortKey::parse(&event_target_value(&ev)))
                    >
                        <option value="name">"Sort by Name"</option>
                        <option value="type">"Sort by Type"</option>
                    </select>
                </div>
            </div>
            <div class=css::tokenList>{body}</div>
        </CollapsibleCard>
    }
}
