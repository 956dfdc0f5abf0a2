//! Statistics Cards Component
//!
//! Summary row of aggregate donation figures.

use leptos::*;

use crate::state::global::GlobalState;

/// Statistics summary cards
#[component]
pub fn StatsCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {move || {
                let stats = state.statistics.get();
                match stats {
                    Some(s) => view! {
                        <StatCard label="Total Donated" value=format!("{} ETH", s.total_donations) />
                        <StatCard label="Donors" value=s.donor_count.to_string() />
                        <StatCard label="Transactions" value=s.transaction_count.to_string() />
                        <StatCard label="Average" value=format!("{} ETH", s.avg_donation) />
                    }.into_view(),
                    None => view! {
                        <StatCard label="Total Donated" value="-".to_string() />
                        <StatCard label="Donors" value="-".to_string() />
                        <StatCard label="Transactions" value="-".to_string() />
                        <StatCard label="Average" value="-".to_string() />
                    }.into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <div class="text-sm text-gray-400 mb-1">{label}</div>
            <div class="text-2xl font-bold">{value}</div>
        </div>
    }
}
