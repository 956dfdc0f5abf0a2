//! Donation Form Component
//!
//! Two submission modes. "On-chain" sends the donation through the wallet,
//! waits for confirmation, then records it on the backend with the real
//! transaction hash. "Record only" skips the chain entirely and posts a
//! donation the user already made elsewhere, hash included.

use leptos::*;

use crate::api::client;
use crate::eth::{DonationContract, Provider, CONTRACT_ADDRESS};
use crate::state::global::GlobalState;
use crate::state::wallet;

/// Donation entry form
#[component]
pub fn DonationForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (mode, set_mode) = create_signal(SubmitMode::OnChain);
    let (amount, set_amount) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (anonymous, set_anonymous) = create_signal(false);
    // Record-only fields
    let (donor, set_donor) = create_signal(String::new());
    let (tx_hash, set_tx_hash) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if message.get().len() > 200 {
            state.show_error("Message cannot exceed 200 characters");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        let current_mode = mode.get();
        let amount_value = amount.get();
        let message_value = message.get();
        let anonymous_value = anonymous.get();
        let donor_value = donor.get();
        let tx_hash_value = tx_hash.get();

        spawn_local(async move {
            let result = match current_mode {
                SubmitMode::OnChain => {
                    submit_on_chain(
                        &state_clone,
                        &amount_value,
                        &message_value,
                        anonymous_value,
                    )
                    .await
                }
                SubmitMode::RecordOnly => {
                    client::submit_donation(
                        &donor_value,
                        &amount_value,
                        &tx_hash_value,
                        &message_value,
                        anonymous_value,
                        "backend-reported",
                    )
                    .await
                    .map(|_| ())
                }
            };

            match result {
                Ok(()) => {
                    state_clone.show_success("Donation recorded successfully");
                    set_amount.set(String::new());
                    set_message.set(String::new());
                    set_anonymous.set(false);
                    set_tx_hash.set(String::new());
                    state_clone.request_reload();
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            // Mode toggle
            <div class="flex space-x-2">
                <ModeButton
                    label="On-chain"
                    current=mode
                    target=SubmitMode::OnChain
                    on_click=move |_| set_mode.set(SubmitMode::OnChain)
                />
                <ModeButton
                    label="Record only"
                    current=mode
                    target=SubmitMode::RecordOnly
                    on_click=move |_| set_mode.set(SubmitMode::RecordOnly)
                />
            </div>

            <form on:submit=on_submit class="space-y-4">
                // Record-only inputs
                {move || {
                    if mode.get() == SubmitMode::RecordOnly {
                        view! {
                            <TextField
                                label="Donor address"
                                placeholder="0x..."
                                value=donor
                                set_value=set_donor
                            />
                            <TextField
                                label="Transaction hash"
                                placeholder="0x..."
                                value=tx_hash
                                set_value=set_tx_hash
                            />
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}

                <TextField
                    label="Amount (ETH)"
                    placeholder="0.1"
                    value=amount
                    set_value=set_amount
                />

                // Message
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "Message (optional, "
                        {move || 200_usize.saturating_sub(message.get().len())}
                        " characters left)"
                    </label>
                    <textarea
                        placeholder="Leave a message with your donation"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white h-20
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                // Anonymous checkbox
                <label class="flex items-center space-x-2 text-sm text-gray-400 cursor-pointer">
                    <input
                        type="checkbox"
                        prop:checked=move || anonymous.get()
                        on:change=move |ev| {
                            set_anonymous.set(event_target_checked(&ev));
                        }
                        class="rounded bg-gray-700 border-gray-600"
                    />
                    <span>"Donate anonymously (your address is never stored)"</span>
                </label>

                // Submit button
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! {
                            <div class="loading-spinner w-5 h-5" />
                            <span>{if mode.get() == SubmitMode::OnChain {
                                "Waiting for confirmation..."
                            } else {
                                "Saving..."
                            }}</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Donate"</span>
                        }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}

/// Send the donation through the wallet, then record it on the backend
async fn submit_on_chain(
    state: &GlobalState,
    amount: &str,
    message: &str,
    anonymous: bool,
) -> Result<(), String> {
    let address = state
        .wallet
        .get_untracked()
        .address()
        .map(String::from)
        .ok_or_else(|| "Connect your wallet to donate on-chain".to_string())?;

    let provider = Provider::detect().map_err(|e| e.to_string())?;
    let contract = DonationContract::new(provider, CONTRACT_ADDRESS);

    let tx_hash = contract.donate(&address, amount, message, anonymous).await?;

    client::submit_donation(
        &address,
        amount,
        &tx_hash,
        message,
        anonymous,
        "chain-confirmed",
    )
    .await?;

    // The donation moved ETH out of the account.
    wallet::refresh_balance(state.clone()).await;

    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum SubmitMode {
    OnChain,
    RecordOnly,
}

#[component]
fn ModeButton(
    label: &'static str,
    current: ReadSignal<SubmitMode>,
    target: SubmitMode,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
