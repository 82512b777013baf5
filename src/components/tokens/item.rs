//! A single token or NFT row.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::explorer;
use crate::models::ClassifiedItem;

stylance::import_crate_style!(css, "src/components/tokens/tokens.module.css");

#[component]
pub fn TokenRow(item: ClassifiedItem) -> impl IntoView {
    let name = item.display_name();
    let short_type = item.short_type();
    let description = item.description();
    let badge = item.balance_badge();
    let explorer_url = explorer::object_url(&item.object.object_id);

    let avatar = match item.image_url() {
        Some(url) => view! {
            <img class=css::tokenImage src=url alt=name.clone() loading="lazy" />
        }
        .into_any(),
        None => {
            let initial = name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            view! { <div class=css::tokenImagePlaceholder>{initial}</div> }.into_any()
        }
    };

    view! {
        <div class=css::tokenItem>
            <div class=css::tokenHeader>
                {avatar}
                <div class=css::tokenInfo>
                    <span class=css::tokenName>
                        {name}
                        {badge.map(|text| view! { <span class=css::tokenBalance>{text}</span> })}
                    </span>
                    <span class=css::tokenType>{short_type}</span>
                </div>
            </div>
            {description.map(|text| view! { <p class=css::tokenDescription>{text}</p> })}
            <a
                class=css::tokenLink
                href=explorer_url
                target="_blank"
                rel="noopener noreferrer"
            >
                <span>"View in Explorer"</span>
                <span class=css::linkIcon><Icon icon=ic::EXTERNAL_LINK /></span>
            </a>
        </div>
    }
}
