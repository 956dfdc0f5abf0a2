//! Wallet-injected provider bindings
//!
//! Wraps the EIP-1193 provider a browser wallet injects as `window.ethereum`.
//! All chain traffic from the dashboard goes through `request`; the wallet
//! owns key material, signing and the actual RPC connection.

use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::eth::units::parse_hex_wei;

/// Errors surfaced by the injected provider
///
/// Each variant maps to a distinct user-facing message; there is no retry
/// and no timeout policy, a failed request just reports and leaves state
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// No `window.ethereum` object
    NotInstalled,
    /// EIP-1193 code 4001
    UserRejected,
    /// EIP-1193 code 4902: the requested chain is not known to the wallet
    UnknownChain,
    /// Code -32603 or another RPC-level failure
    Rpc(String),
    /// Anything else thrown from the JS side
    Js(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::NotInstalled => {
                write!(f, "No wallet detected. Please install MetaMask to continue.")
            }
            ProviderError::UserRejected => write!(f, "You rejected the request."),
            ProviderError::UnknownChain => write!(
                f,
                "Sepolia network not found in your wallet. Please add it manually."
            ),
            ProviderError::Rpc(msg) => write!(
                f,
                "RPC error: {}. Please ensure your wallet is properly configured.",
                msg
            ),
            ProviderError::Js(msg) => write!(f, "{}", msg),
        }
    }
}

impl ProviderError {
    /// Map a thrown JS error to a variant by its EIP-1193 code
    fn from_js(value: JsValue) -> Self {
        let code = Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64());
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| "Unknown wallet error".to_string());

        match code.map(|c| c as i64) {
            Some(4001) => ProviderError::UserRejected,
            Some(4902) => ProviderError::UnknownChain,
            Some(-32603) => ProviderError::Rpc(message),
            _ => ProviderError::Js(message),
        }
    }
}

/// Handle to `window.ethereum`
#[derive(Clone)]
pub struct Provider {
    ethereum: JsValue,
}

impl Provider {
    /// Look up the injected provider, if any
    pub fn detect() -> Result<Self, ProviderError> {
        let window = web_sys::window().ok_or(ProviderError::NotInstalled)?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|_| ProviderError::NotInstalled)?;

        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(ProviderError::NotInstalled);
        }

        Ok(Self { ethereum })
    }

    /// Issue an EIP-1193 `request({method, params})`
    pub async fn request(&self, method: &str, params: JsValue) -> Result<JsValue, ProviderError> {
        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(ProviderError::from_js)?;
        if !params.is_undefined() {
            Reflect::set(&args, &JsValue::from_str("params"), &params)
                .map_err(ProviderError::from_js)?;
        }

        let request_fn: Function = Reflect::get(&self.ethereum, &JsValue::from_str("request"))
            .map_err(ProviderError::from_js)?
            .into();

        let promise: Promise = request_fn
            .call1(&self.ethereum, &args)
            .map_err(ProviderError::from_js)?
            .into();

        JsFuture::from(promise).await.map_err(ProviderError::from_js)
    }

    /// Prompt the wallet for account access (`eth_requestAccounts`)
    pub async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let result = self.request("eth_requestAccounts", JsValue::UNDEFINED).await?;
        Ok(Array::from(&result)
            .iter()
            .filter_map(|v| v.as_string())
            .collect())
    }

    /// Active chain id as a hex string (`eth_chainId`)
    pub async fn chain_id(&self) -> Result<String, ProviderError> {
        let result = self.request("eth_chainId", JsValue::UNDEFINED).await?;
        result
            .as_string()
            .ok_or_else(|| ProviderError::Js("eth_chainId returned a non-string".to_string()))
    }

    /// Ask the wallet to switch to the given chain
    pub async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderError> {
        let param = Object::new();
        Reflect::set(
            &param,
            &JsValue::from_str("chainId"),
            &JsValue::from_str(chain_id),
        )
        .map_err(ProviderError::from_js)?;

        let params = Array::new();
        params.push(&param);

        self.request("wallet_switchEthereumChain", params.into())
            .await?;
        Ok(())
    }

    /// Account balance in wei (`eth_getBalance`)
    pub async fn get_balance(&self, address: &str) -> Result<u128, ProviderError> {
        let params = Array::new();
        params.push(&JsValue::from_str(address));
        params.push(&JsValue::from_str("latest"));

        let result = self.request("eth_getBalance", params.into()).await?;
        let hex = result
            .as_string()
            .ok_or_else(|| ProviderError::Js("eth_getBalance returned a non-string".to_string()))?;
        parse_hex_wei(&hex).map_err(ProviderError::Js)
    }

    /// Send a transaction through the wallet; resolves to the tx hash
    pub async fn send_transaction(
        &self,
        from: &str,
        to: &str,
        value_hex: &str,
        data: &str,
    ) -> Result<String, ProviderError> {
        let tx = Object::new();
        for (key, val) in [("from", from), ("to", to), ("value", value_hex), ("data", data)] {
            Reflect::set(&tx, &JsValue::from_str(key), &JsValue::from_str(val))
                .map_err(ProviderError::from_js)?;
        }

        let params = Array::new();
        params.push(&tx);

        let result = self.request("eth_sendTransaction", params.into()).await?;
        result
            .as_string()
            .ok_or_else(|| ProviderError::Js("Transaction returned no hash".to_string()))
    }

    /// Read-only contract call (`eth_call`), returns 0x-prefixed return data
    pub async fn call(&self, to: &str, data: &str) -> Result<String, ProviderError> {
        let call = Object::new();
        Reflect::set(&call, &JsValue::from_str("to"), &JsValue::from_str(to))
            .map_err(ProviderError::from_js)?;
        Reflect::set(&call, &JsValue::from_str("data"), &JsValue::from_str(data))
            .map_err(ProviderError::from_js)?;

        let params = Array::new();
        params.push(&call);
        params.push(&JsValue::from_str("latest"));

        let result = self.request("eth_call", params.into()).await?;
        result
            .as_string()
            .ok_or_else(|| ProviderError::Js("eth_call returned no data".to_string()))
    }

    /// Fetch a transaction receipt; `None` while the tx is still pending
    pub async fn transaction_receipt(&self, tx_hash: &str) -> Result<Option<bool>, ProviderError> {
        let params = Array::new();
        params.push(&JsValue::from_str(tx_hash));

        let result = self
            .request("eth_getTransactionReceipt", params.into())
            .await?;

        if result.is_null() || result.is_undefined() {
            return Ok(None);
        }

        // status is "0x1" on success, "0x0" on revert
        let status = Reflect::get(&result, &JsValue::from_str("status"))
            .ok()
            .and_then(|s| s.as_string());
        Ok(Some(status.as_deref() == Some("0x1")))
    }

    /// Subscribe to a provider event (`accountsChanged`, `chainChanged`)
    ///
    /// The closure must be leaked (`Closure::forget`) by the caller to stay
    /// alive for the page lifetime.
    pub fn on(&self, event: &str, callback: &Closure<dyn FnMut(JsValue)>) {
        if let Ok(on_fn) = Reflect::get(&self.ethereum, &JsValue::from_str("on")) {
            let on_fn: Function = on_fn.into();
            let _ = on_fn.call2(
                &self.ethereum,
                &JsValue::from_str(event),
                callback.as_ref().unchecked_ref(),
            );
        }
    }
}
