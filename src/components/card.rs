//! Collapsible card shell shared by all dashboard panels.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/card.module.css");

/// A panel with a clickable header and a `−`/`+` toggle, default expanded.
///
/// Children are rendered once; collapsing hides the content via CSS so the
/// panel's state survives the toggle.
#[component]
pub fn CollapsibleCard(
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(true);

    let card_class = move || {
        if expanded.get() {
            css::card.to_string()
        } else {
            format!("{} {}", css::card, css::collapsed)
        }
    };

    view! {
        <div class=card_class>
            <div class=css::cardHeader on:click=move |_| set_expanded.update(|e| *e = !*e)>
                <h2 class=css::cardTitle>{title}</h2>
                <button class=css::toggleButton>
                    {move || if expanded.get() { "\u{2212}" } else { "+" }}
                </button>
            </div>
            <div class=css::cardContent>{children()}</div>
        </div>
    }
}
