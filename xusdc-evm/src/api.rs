//! Request and response bodies of the Gateway REST API.
//!
//! Only the wire shapes live here; this crate performs no HTTP. Callers post
//! the bodies to [`GATEWAY_TESTNET_API_URL`] with their own client.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use xusdc::units::format_units;

use crate::burn::BurnIntent;
use crate::networks::domain_label;

/// Base URL of the Gateway testnet API.
pub const GATEWAY_TESTNET_API_URL: &str = "https://gateway-api-testnet.circle.com";

/// Path of the transfer endpoint (`POST`, body is a JSON array).
pub const TRANSFER_PATH: &str = "/v1/transfer";

/// Path of the balances endpoint (`POST`).
pub const BALANCES_PATH: &str = "/v1/balances";

/// Token symbol the balances endpoint is queried with.
pub const USDC_TOKEN: &str = "USDC";

/// One signed burn intent submitted to [`TRANSFER_PATH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// The burn intent exactly as it was signed.
    pub burn_intent: BurnIntent,
    /// EIP-712 signature over the intent.
    pub signature: Bytes,
}

/// Serializes the JSON array body of a transfer request.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn transfer_request_body(requests: &[TransferRequest]) -> Result<String, serde_json::Error> {
    serde_json::to_string(requests)
}

/// A depositor/domain pair whose balance is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSource {
    /// Owner of the Gateway balance.
    pub depositor: Address,
    /// Gateway domain; omitted to query every domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<u32>,
}

/// Body of a [`BALANCES_PATH`] request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancesRequest {
    /// Token symbol.
    pub token: String,
    /// Sources to report balances for.
    pub sources: Vec<BalanceSource>,
}

impl BalancesRequest {
    /// Builds a USDC balances request for one depositor.
    ///
    /// Each domain becomes its own source. With no domains a single source
    /// without a domain is sent.
    #[must_use]
    pub fn usdc(depositor: Address, domains: &[u32]) -> Self {
        let sources = if domains.is_empty() {
            vec![BalanceSource {
                depositor,
                domain: None,
            }]
        } else {
            domains
                .iter()
                .map(|&domain| BalanceSource {
                    depositor,
                    domain: Some(domain),
                })
                .collect()
        };
        Self {
            token: USDC_TOKEN.to_owned(),
            sources,
        }
    }
}

/// A normalized balance entry.
///
/// Every field is optional because the API does not always report all of
/// them. `balance` is kept as the raw string the API returned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GatewayBalance {
    /// Gateway domain of the balance.
    pub domain: Option<u32>,
    /// Depositor as reported by the API.
    pub depositor: Option<String>,
    /// Balance in base units, as text.
    pub balance: Option<String>,
}

impl GatewayBalance {
    /// Returns a display label for the entry's domain.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self.domain {
            Some(domain) => domain_label(domain).map_or_else(|| format!("Domain {domain}"), str::to_owned),
            None => "Unknown domain".to_owned(),
        }
    }

    /// Parses the balance as an integer amount of base units.
    ///
    /// Returns `None` for missing, empty or non-integer balances.
    #[must_use]
    pub fn base_units(&self) -> Option<U256> {
        let balance = self.balance.as_deref()?.trim();
        if balance.is_empty() {
            return None;
        }
        U256::from_str_radix(balance, 10).ok()
    }
}

/// Response of a [`BALANCES_PATH`] request.
///
/// Deserialization accepts every shape the API has been seen to return:
/// `balances` at the top level or under `data`, entry fields flat or nested
/// under `source`, and the amount under `balance`, `amount` or `value`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawBalancesResponse")]
pub struct BalancesResponse {
    /// Normalized entries, in response order.
    pub balances: Vec<GatewayBalance>,
}

impl BalancesResponse {
    /// Sums every entry whose balance is an integer base-unit amount.
    ///
    /// Non-numeric entries are skipped. An empty response totals zero; a
    /// non-empty response without a single numeric entry returns `None`.
    #[must_use]
    pub fn total(&self) -> Option<U256> {
        if self.balances.is_empty() {
            return Some(U256::ZERO);
        }
        self.balances
            .iter()
            .filter_map(GatewayBalance::base_units)
            .reduce(U256::saturating_add)
    }

    /// Returns [`Self::total`] as a decimal string with `decimals` places.
    #[must_use]
    pub fn formatted_total(&self, decimals: u8) -> Option<String> {
        self.total().map(|total| format_units(total, decimals))
    }
}

#[derive(Deserialize)]
struct RawBalancesResponse {
    #[serde(default)]
    balances: Option<Vec<RawBalanceEntry>>,
    #[serde(default)]
    data: Option<RawBalancesData>,
}

#[derive(Deserialize)]
struct RawBalancesData {
    #[serde(default)]
    balances: Option<Vec<RawBalanceEntry>>,
}

#[derive(Deserialize)]
struct RawBalanceEntry {
    #[serde(default)]
    domain: Option<u32>,
    #[serde(default)]
    depositor: Option<String>,
    #[serde(default)]
    balance: Option<serde_json::Value>,
    #[serde(default)]
    amount: Option<serde_json::Value>,
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    source: Option<RawBalanceSource>,
}

#[derive(Deserialize)]
struct RawBalanceSource {
    #[serde(default)]
    domain: Option<u32>,
    #[serde(default)]
    depositor: Option<String>,
}

fn amount_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

impl From<RawBalanceEntry> for GatewayBalance {
    fn from(raw: RawBalanceEntry) -> Self {
        let (source_domain, source_depositor) = raw
            .source
            .map_or((None, None), |source| (source.domain, source.depositor));
        Self {
            domain: raw.domain.or(source_domain),
            depositor: raw.depositor.or(source_depositor),
            balance: amount_text(raw.balance)
                .or_else(|| amount_text(raw.amount))
                .or_else(|| amount_text(raw.value)),
        }
    }
}

impl From<RawBalancesResponse> for BalancesResponse {
    fn from(raw: RawBalancesResponse) -> Self {
        let entries = raw
            .balances
            .or_else(|| raw.data.and_then(|data| data.balances))
            .unwrap_or_default();
        Self {
            balances: entries.into_iter().map(GatewayBalance::from).collect(),
        }
    }
}
