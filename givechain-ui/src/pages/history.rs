//! History Page
//!
//! Donation lookup by donor address.

use leptos::*;

use crate::api::client;
use crate::state::global::{Donation, GlobalState};
use crate::state::wallet::WalletSession;

/// Donor history page component
#[component]
pub fn History() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (address, set_address) = create_signal(String::new());
    let (results, set_results) = create_signal(None::<Vec<Donation>>);
    let (searching, set_searching) = create_signal(false);

    // Prefill with the connected account
    let wallet_state = state.clone();
    create_effect(move |_| {
        if let WalletSession::Connected { address: connected, .. } = wallet_state.wallet.get() {
            if address.get_untracked().is_empty() {
                set_address.set(connected);
            }
        }
    });

    let search_state = state.clone();
    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let query = address.get().trim().to_string();
        if query.is_empty() {
            search_state.show_error("Enter a donor address to search");
            return;
        }

        set_searching.set(true);
        let state_clone = search_state.clone();
        spawn_local(async move {
            match client::fetch_donations_by_donor(&query).await {
                Ok(donations) => {
                    set_results.set(Some(donations));
                }
                Err(e) => {
                    set_results.set(None);
                    state_clone.show_error(&e);
                }
            }
            set_searching.set(false);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Donation History"</h1>
                <p class="text-gray-400 mt-1">"Look up every donation recorded for an address"</p>
            </div>

            // Search form
            <section class="bg-gray-800 rounded-xl p-6">
                <form on:submit=on_search class="flex space-x-2">
                    <input
                        type="text"
                        placeholder="0x..."
                        prop:value=move || address.get()
                        on:input=move |ev| set_address.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3 font-mono
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        type="submit"
                        disabled=move || searching.get()
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if searching.get() { "Searching..." } else { "Search" }}
                    </button>
                </form>

                <p class="text-sm text-gray-500 mt-3">
                    "Lookups are case-insensitive. Anonymous donations never match a wallet address."
                </p>
            </section>

            // Results
            {move || {
                results.get().map(|donations| {
                    if donations.is_empty() {
                        view! {
                            <section class="bg-gray-800 rounded-xl p-6 text-center text-gray-400">
                                "No donations found for this address."
                            </section>
                        }.into_view()
                    } else {
                        view! {
                            <section class="bg-gray-800 rounded-xl p-6">
                                <h2 class="text-xl font-semibold mb-4">
                                    {format!("{} donation(s)", donations.len())}
                                </h2>
                                <div class="space-y-2">
                                    {donations.into_iter().map(|d| view! {
                                        <div class="flex items-center justify-between py-3
                                                    border-b border-gray-700 last:border-0">
                                            <div>
                                                <div class="font-medium text-green-400">
                                                    {format!("{} ETH", d.amount)}
                                                </div>
                                                <div class="text-sm text-gray-400">
                                                    {if d.message.is_empty() {
                                                        "-".to_string()
                                                    } else {
                                                        d.message.clone()
                                                    }}
                                                </div>
                                            </div>
                                            <div class="text-right text-sm text-gray-400">
                                                <div>{d.formatted_time()}</div>
                                                <div class="font-mono">{d.short_tx_hash()}</div>
                                            </div>
                                        </div>
                                    }).collect_view()}
                                </div>
                            </section>
                        }.into_view()
                    }
                })
            }}
        </div>
    }
}
