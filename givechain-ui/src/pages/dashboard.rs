//! Dashboard Page
//!
//! Main view: aggregate statistics, the donation form, and the live
//! donation list. The list can be read from the backend API or straight
//! from the contract through the wallet provider.

use leptos::*;

use crate::api::client::{self, Statistics};
use crate::components::{DonationForm, DonationTable, Loading, StatsCards};
use crate::eth::{DonationContract, Provider, CONTRACT_ADDRESS};
use crate::state::global::{DataSource, Donation, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch on mount and again whenever the source changes or a reload
    // is requested (e.g. after a submitted donation).
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let source = state_for_effect.source.get();
        state_for_effect.reload.get();

        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let result = match source {
                DataSource::Backend => load_from_backend().await,
                DataSource::Chain => load_from_chain().await,
            };

            match result {
                Ok((donations, statistics)) => {
                    state.donations.set(donations);
                    state.statistics.set(Some(statistics));
                }
                Err(e) => {
                    state.donations.set(Vec::new());
                    state.statistics.set(None);
                    state.show_error(&e);
                }
            }

            state.loading.set(false);
        });
    });

    let toggle_state = state.clone();
    let refresh_state = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Donations"</h1>
                    <p class="text-gray-400 mt-1">"Transparent giving on Sepolia"</p>
                </div>

                // Source toggle and refresh
                <div class="flex items-center space-x-2">
                    <SourceToggle state=toggle_state />
                    <button
                        on:click=move |_| refresh_state.request_reload()
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            // Statistics summary
            <StatsCards />

            // Two column layout for form and list
            <div class="grid lg:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Make a Donation"</h2>
                    <DonationForm />
                </section>

                <section class="bg-gray-800 rounded-xl p-6 lg:col-span-2">
                    <h2 class="text-xl font-semibold mb-4">"Recent Donations"</h2>
                    {move || {
                        if state.loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <DonationTable /> }.into_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}

/// Backend/on-chain source switch
#[component]
fn SourceToggle(state: GlobalState) -> impl IntoView {
    view! {
        <div class="flex rounded-lg overflow-hidden border border-gray-700">
            {[DataSource::Backend, DataSource::Chain].into_iter().map(|source| {
                let state = state.clone();
                view! {
                    <button
                        on:click=move |_| state.source.set(source)
                        class=move || {
                            let base = "px-4 py-2 text-sm font-medium transition-colors";
                            if state.source.get() == source {
                                format!("{} bg-gray-600 text-white", base)
                            } else {
                                format!("{} bg-gray-800 text-gray-400 hover:text-white", base)
                            }
                        }
                    >
                        {source.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

async fn load_from_backend() -> Result<(Vec<Donation>, Statistics), String> {
    let donations = client::fetch_donations().await?;
    let statistics = client::fetch_statistics().await?;
    Ok((donations, statistics))
}

/// Read donations and aggregates straight from the contract
///
/// Chain reads carry no transaction hash per donation, and the contract's
/// statistics tuple has no separate transaction count, so the donation
/// count stands in for it.
async fn load_from_chain() -> Result<(Vec<Donation>, Statistics), String> {
    let provider = Provider::detect().map_err(|e| e.to_string())?;
    let contract = DonationContract::new(provider, CONTRACT_ADDRESS);

    let chain_donations = contract.get_donations().await?;
    let chain_stats = contract.get_statistics().await?;

    let statistics = Statistics {
        total_donations: chain_stats.total_donations,
        donor_count: chain_stats.donor_count,
        transaction_count: chain_donations.len() as u64,
        avg_donation: chain_stats.avg_donation,
    };

    let donations = chain_donations
        .into_iter()
        .map(|d| Donation {
            id: d.id,
            donor: if d.is_anonymous {
                "Anonymous".to_string()
            } else {
                d.donor
            },
            amount: d.amount,
            timestamp: d.timestamp,
            tx_hash: "-".to_string(),
            message: d.message,
            is_anonymous: d.is_anonymous,
            status: Some("confirmed".to_string()),
            provenance: Some("chain-confirmed".to_string()),
        })
        .collect();

    Ok((donations, statistics))
}
