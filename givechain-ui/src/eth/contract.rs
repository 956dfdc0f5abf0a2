//! Donation contract operations
//!
//! High-level wrapper combining the provider, ABI codec and unit conversions.
//! Reads go through `eth_call`; the donate path sends a payable transaction
//! and polls for its receipt.

use gloo_timers::future::TimeoutFuture;

use crate::eth::abi;
use crate::eth::provider::Provider;
use crate::eth::units::{format_eth, parse_eth, to_hex_wei};

/// Receipt polling interval
const RECEIPT_POLL_MS: u32 = 2_000;
/// Give up waiting for a receipt after this many polls
const RECEIPT_MAX_POLLS: u32 = 60;

/// A donation as read from the contract, converted for display
#[derive(Debug, Clone, PartialEq)]
pub struct ChainDonation {
    pub id: u64,
    pub donor: String,
    /// Decimal ETH string
    pub amount: String,
    /// Milliseconds since epoch (the contract stores seconds)
    pub timestamp: i64,
    pub message: String,
    pub is_anonymous: bool,
}

/// Aggregates as reported by the contract's `getStatistics()`
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStatistics {
    pub total_donations: String,
    pub donor_count: u64,
    pub avg_donation: String,
}

/// Handle to the donation contract through the wallet provider
#[derive(Clone)]
pub struct DonationContract {
    provider: Provider,
    address: String,
}

impl DonationContract {
    pub fn new(provider: Provider, address: impl Into<String>) -> Self {
        Self {
            provider,
            address: address.into(),
        }
    }

    /// Contract address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Send a donation and wait for it to confirm; resolves to the tx hash
    pub async fn donate(
        &self,
        from: &str,
        amount_eth: &str,
        message: &str,
        anonymous: bool,
    ) -> Result<String, String> {
        let wei = parse_eth(amount_eth)?;
        let data = abi::encode_donate(message, anonymous);

        let tx_hash = self
            .provider
            .send_transaction(from, &self.address, &to_hex_wei(wei), &data)
            .await
            .map_err(|e| e.to_string())?;

        self.wait_for_receipt(&tx_hash).await?;
        Ok(tx_hash)
    }

    /// Poll for the transaction receipt until it lands
    async fn wait_for_receipt(&self, tx_hash: &str) -> Result<(), String> {
        for _ in 0..RECEIPT_MAX_POLLS {
            match self
                .provider
                .transaction_receipt(tx_hash)
                .await
                .map_err(|e| e.to_string())?
            {
                Some(true) => return Ok(()),
                Some(false) => return Err("Transaction reverted on chain".to_string()),
                None => TimeoutFuture::new(RECEIPT_POLL_MS).await,
            }
        }
        Err("Timed out waiting for transaction confirmation".to_string())
    }

    /// Read all donations from the contract
    pub async fn get_donations(&self) -> Result<Vec<ChainDonation>, String> {
        let data = self.eth_call(&abi::encode_view_call("getDonations()")).await?;

        Ok(abi::decode_donations(&data)?
            .into_iter()
            .map(|d| ChainDonation {
                id: d.id,
                donor: d.donor,
                amount: format_eth(d.amount_wei),
                timestamp: d.timestamp_secs as i64 * 1000,
                message: d.message,
                is_anonymous: d.is_anonymous,
            })
            .collect())
    }

    /// Read contract statistics
    pub async fn get_statistics(&self) -> Result<ChainStatistics, String> {
        let data = self
            .eth_call(&abi::encode_view_call("getStatistics()"))
            .await?;
        let (total_wei, donor_count, avg_wei) = abi::decode_statistics(&data)?;

        Ok(ChainStatistics {
            total_donations: format_eth(total_wei),
            donor_count,
            avg_donation: format_eth(avg_wei),
        })
    }

    /// Contract balance as a decimal ETH string
    pub async fn get_balance(&self) -> Result<String, String> {
        let data = self.eth_call(&abi::encode_view_call("getBalance()")).await?;
        Ok(format_eth(abi::decode_uint(&data)?))
    }

    async fn eth_call(&self, calldata: &str) -> Result<Vec<u8>, String> {
        let result = self
            .provider
            .call(&self.address, calldata)
            .await
            .map_err(|e| e.to_string())?;
        abi::decode_hex(&result)
    }
}
