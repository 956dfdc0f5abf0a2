//! Donation Table Component
//!
//! Lists donations from the active data source, newest first.

use leptos::*;

use crate::state::global::{Donation, GlobalState};

/// Donation list table
#[component]
pub fn DonationTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="overflow-x-auto">
            {move || {
                let mut donations = state.donations.get();
                if donations.is_empty() {
                    return view! {
                        <p class="text-gray-400 text-sm py-4">"No donations yet. Be the first!"</p>
                    }.into_view();
                }

                donations.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

                view! {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-400 border-b border-gray-700">
                                <th class="py-3 pr-4">"Donor"</th>
                                <th class="py-3 pr-4">"Amount"</th>
                                <th class="py-3 pr-4">"Message"</th>
                                <th class="py-3 pr-4">"Time"</th>
                                <th class="py-3">"Tx"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {donations.into_iter().map(|donation| view! {
                                <DonationRow donation=donation />
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn DonationRow(donation: Donation) -> impl IntoView {
    let donor_class = if donation.is_anonymous {
        "py-3 pr-4 text-gray-400 italic"
    } else {
        "py-3 pr-4 font-mono"
    };

    view! {
        <tr class="border-b border-gray-700 last:border-0 hover:bg-gray-700/50">
            <td class=donor_class>{donation.short_donor()}</td>
            <td class="py-3 pr-4 font-medium text-green-400">
                {format!("{} ETH", donation.amount)}
            </td>
            <td class="py-3 pr-4 text-gray-300 max-w-xs truncate">
                {if donation.message.is_empty() {
                    "-".to_string()
                } else {
                    donation.message.clone()
                }}
            </td>
            <td class="py-3 pr-4 text-gray-400">{donation.formatted_time()}</td>
            <td class="py-3 font-mono text-gray-400">{donation.short_tx_hash()}</td>
        </tr>
    }
}
