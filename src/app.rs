//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::{ConnectButton, TokenList, TransactionHistory, WalletInfo, use_theme};
use crate::config::APP_NAME;
use crate::models::{Theme, WalletState};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Wallet connection state.
    pub wallet: RwSignal<WalletState>,

    /// Persisted light/dark preference.
    pub theme: RwSignal<Theme>,

    /// Request epoch. Bumped on every wallet transition; spawned fetches
    /// capture it and drop results that resolve after a newer transition.
    pub epoch: RwSignal<u64>,
}

impl AppContext {
    pub fn new(theme: RwSignal<Theme>) -> Self {
        Self {
            wallet: RwSignal::new(WalletState::default()),
            theme,
            epoch: RwSignal::new(0),
        }
    }

    /// Transition the wallet state, invalidating every in-flight fetch.
    pub fn set_wallet(&self, state: WalletState) {
        self.epoch.update(|e| *e += 1);
        self.wallet.set(state);
    }

    /// Epoch to capture before spawning a fetch.
    pub fn current_epoch(&self) -> u64 {
        self.epoch.get_untracked()
    }

    /// Whether a captured epoch is still the live one.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch.get_untracked() == epoch
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Initializes the theme from storage (or the system preference)
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the header and the three wallet panels
#[component]
pub fn App() -> impl IntoView {
    let theme = use_theme();
    let ctx = AppContext::new(theme);
    provide_context(ctx);

    let connected = Signal::derive(move || ctx.wallet.with(|w| w.is_connected()));
    let theme_icon = Signal::derive(move || {
        if ctx.theme.get().is_dark() {
            ic::SUN
        } else {
            ic::MOON
        }
    });
    let toggle_theme = move |_: leptos::ev::MouseEvent| {
        ctx.theme.update(|t| *t = t.toggled());
    };

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorScreen>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=css::container>
                <header class=css::header>
                    <h1 class=css::title>{APP_NAME}</h1>
                    <div class=css::headerActions>
                        <button
                            class=css::themeToggle
                            on:click=toggle_theme
                            title="Toggle theme"
                        >
                            {move || view! { <Icon icon=theme_icon.get() /> }}
                        </button>
                        <ConnectButton />
                    </div>
                </header>
                <main class=css::main>
                    <Show when=move || connected.get()>
                        <section class=css::panels>
                            <WalletInfo />
                            <TokenList />
                            <TransactionHistory />
                        </section>
                    </Show>
                </main>
            </div>
        </ErrorBoundary>
    }
}
