//! Wallet Button Component
//!
//! Connect/disconnect control showing the active account.

use leptos::*;

use crate::state::global::{shorten_address, GlobalState};
use crate::state::wallet::{self, WalletSession};

/// Wallet connection button
#[component]
pub fn WalletButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let connect_state = state.clone();
    let on_connect = move |_| {
        let state = connect_state.clone();
        spawn_local(async move {
            wallet::connect(state).await;
        });
    };

    let disconnect_state = state.clone();
    let on_disconnect = move |_| {
        wallet::disconnect(&disconnect_state);
    };

    view! {
        {move || match state.wallet.get() {
            WalletSession::Disconnected => view! {
                <button
                    on:click=on_connect.clone()
                    class="ml-4 px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Connect Wallet"
                </button>
            }.into_view(),

            WalletSession::Connecting => view! {
                <button
                    disabled=true
                    class="ml-4 px-4 py-2 bg-gray-600 rounded-lg text-sm font-medium
                           cursor-not-allowed flex items-center space-x-2"
                >
                    <div class="loading-spinner w-4 h-4" />
                    <span>"Connecting..."</span>
                </button>
            }.into_view(),

            WalletSession::Connected { address, balance, .. } => view! {
                <div class="ml-4 flex items-center space-x-2">
                    <span class="text-sm text-gray-400">{format!("{} ETH", balance)}</span>
                    <button
                        on:click=on_disconnect.clone()
                        title="Disconnect"
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-mono transition-colors"
                    >
                        {shorten_address(&address)}
                    </button>
                </div>
            }.into_view(),
        }}
    }
}
