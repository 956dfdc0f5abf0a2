//! Wallet session state machine
//!
//! Connecting goes: detect provider, request accounts, verify the active
//! chain is Sepolia (asking the wallet to switch if not), then fetch the
//! balance. Any failure reports a message and drops back to Disconnected.

use leptos::*;
use wasm_bindgen::prelude::*;

use crate::eth::{Provider, ProviderError, SEPOLIA_CHAIN_ID};
use crate::eth::units::format_eth;
use crate::state::global::GlobalState;

/// Connection state of the injected wallet
#[derive(Clone, Debug, PartialEq)]
pub enum WalletSession {
    Disconnected,
    Connecting,
    Connected {
        address: String,
        /// Decimal ETH string
        balance: String,
        chain_id: String,
    },
}

impl WalletSession {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletSession::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletSession::Connected { address, .. } => Some(address),
            _ => None,
        }
    }
}

/// Connect the wallet and store the session in global state
pub async fn connect(state: GlobalState) {
    state.wallet.set(WalletSession::Connecting);

    match try_connect().await {
        Ok(session) => {
            state.wallet.set(session);
            state.show_success("Wallet connected");
        }
        Err(e) => {
            state.wallet.set(WalletSession::Disconnected);
            state.show_error(&e.to_string());
        }
    }
}

async fn try_connect() -> Result<WalletSession, ProviderError> {
    let provider = Provider::detect()?;

    let accounts = provider.request_accounts().await?;
    let address = accounts
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Js("Wallet returned no accounts".to_string()))?;

    let mut chain_id = provider.chain_id().await?;
    if chain_id != SEPOLIA_CHAIN_ID {
        provider.switch_chain(SEPOLIA_CHAIN_ID).await?;
        chain_id = SEPOLIA_CHAIN_ID.to_string();
    }

    let balance = format_eth(provider.get_balance(&address).await?);

    Ok(WalletSession::Connected {
        address,
        balance,
        chain_id,
    })
}

/// Drop the session; the wallet itself stays authorized until the user
/// revokes it there.
pub fn disconnect(state: &GlobalState) {
    state.wallet.set(WalletSession::Disconnected);
}

/// Refresh the connected account's balance
pub async fn refresh_balance(state: GlobalState) {
    let Some(address) = state.wallet.get_untracked().address().map(String::from) else {
        return;
    };

    let Ok(provider) = Provider::detect() else {
        return;
    };

    if let Ok(wei) = provider.get_balance(&address).await {
        state.wallet.update(|session| {
            if let WalletSession::Connected { balance, .. } = session {
                *balance = format_eth(wei);
            }
        });
    }
}

/// Register provider event listeners for the page lifetime
///
/// An emptied account list disconnects; a changed account re-resolves the
/// session; a chain change reloads the page so every signal starts clean.
pub fn register_listeners(state: GlobalState) {
    let Ok(provider) = Provider::detect() else {
        return;
    };

    let accounts_state = state.clone();
    let accounts_changed = Closure::wrap(Box::new(move |accounts: JsValue| {
        let accounts: Vec<String> = js_sys::Array::from(&accounts)
            .iter()
            .filter_map(|v| v.as_string())
            .collect();

        if accounts.is_empty() {
            disconnect(&accounts_state);
            accounts_state.show_error("Wallet disconnected");
        } else {
            let state = accounts_state.clone();
            leptos::spawn_local(async move {
                connect(state).await;
            });
        }
    }) as Box<dyn FnMut(JsValue)>);

    let chain_changed = Closure::wrap(Box::new(move |_chain_id: JsValue| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }) as Box<dyn FnMut(JsValue)>);

    provider.on("accountsChanged", &accounts_changed);
    provider.on("chainChanged", &chain_changed);

    // Listeners live as long as the page.
    accounts_changed.forget();
    chain_changed.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_accessors() {
        let session = WalletSession::Connected {
            address: "0xabc".to_string(),
            balance: "1.50".to_string(),
            chain_id: SEPOLIA_CHAIN_ID.to_string(),
        };
        assert!(session.is_connected());
        assert_eq!(session.address(), Some("0xabc"));

        assert!(!WalletSession::Disconnected.is_connected());
        assert_eq!(WalletSession::Connecting.address(), None);
    }
}
