//! Wire format types for Gateway burn intents.
//!
//! These mirror the Gateway `TransferSpec` / `BurnIntent` EIP-712 structs in
//! the JSON shape consumed by wallet `signTypedData` endpoints and by the
//! Gateway `/v1/transfer` API:
//!
//! - `uint32` fields serialize as JSON numbers
//! - `uint256` fields serialize as decimal strings
//! - `bytes32` / `bytes` fields serialize as lowercase `0x` hex

use alloy_primitives::{B256, Bytes, U256};
use alloy_sol_types::{SolStruct, eip712_domain};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::abi;

/// EIP-712 domain name of the Gateway wallet.
pub const GATEWAY_DOMAIN_NAME: &str = "GatewayWallet";

/// EIP-712 domain version of the Gateway wallet.
pub const GATEWAY_DOMAIN_VERSION: &str = "1";

/// `TransferSpec` version produced by this crate.
pub const TRANSFER_SPEC_VERSION: u32 = 1;

/// Field layout of the `EIP712Domain` type used by Gateway.
pub const EIP712_DOMAIN_FIELDS: [(&str, &str); 2] = [("name", "string"), ("version", "string")];

/// Field layout of the Gateway `TransferSpec` type.
///
/// Order is part of the protocol: it determines the struct hash.
pub const TRANSFER_SPEC_FIELDS: [(&str, &str); 14] = [
    ("version", "uint32"),
    ("sourceDomain", "uint32"),
    ("destinationDomain", "uint32"),
    ("sourceContract", "bytes32"),
    ("destinationContract", "bytes32"),
    ("sourceToken", "bytes32"),
    ("destinationToken", "bytes32"),
    ("sourceDepositor", "bytes32"),
    ("destinationRecipient", "bytes32"),
    ("sourceSigner", "bytes32"),
    ("destinationCaller", "bytes32"),
    ("value", "uint256"),
    ("salt", "bytes32"),
    ("hookData", "bytes"),
];

/// Field layout of the Gateway `BurnIntent` type.
pub const BURN_INTENT_FIELDS: [(&str, &str); 3] = [
    ("maxBlockHeight", "uint256"),
    ("maxFee", "uint256"),
    ("spec", "TransferSpec"),
];

/// One cross-chain value movement, as defined by the Gateway protocol.
///
/// Every address-typed field is a 20-byte address left-padded to 32 bytes.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferSpec {
    /// Protocol version, always [`TRANSFER_SPEC_VERSION`].
    pub version: u32,
    /// Gateway domain of the chain funds are burned on.
    pub source_domain: u32,
    /// Gateway domain of the chain funds are minted on.
    pub destination_domain: u32,
    /// `GatewayWallet` contract on the source chain.
    pub source_contract: B256,
    /// `GatewayMinter` contract on the destination chain.
    pub destination_contract: B256,
    /// USDC on the source chain.
    pub source_token: B256,
    /// USDC on the destination chain.
    pub destination_token: B256,
    /// Owner of the Gateway balance being burned.
    pub source_depositor: B256,
    /// Receiver of the minted funds.
    pub destination_recipient: B256,
    /// Key authorized to sign for the depositor.
    pub source_signer: B256,
    /// Only this caller may execute the mint; zero means anyone.
    pub destination_caller: B256,
    /// Amount in token base units.
    #[serde_as(as = "DisplayFromStr")]
    pub value: U256,
    /// Per-intent random salt.
    pub salt: B256,
    /// Opaque extension data, empty by default.
    pub hook_data: Bytes,
}

/// A [`TransferSpec`] with the intent-level bounds the depositor signs.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnIntent {
    /// Highest block at which the intent is valid; `U256::MAX` means no limit.
    #[serde_as(as = "DisplayFromStr")]
    pub max_block_height: U256,
    /// Largest fee, in base units, the bridge may take.
    #[serde_as(as = "DisplayFromStr")]
    pub max_fee: U256,
    /// The transfer being authorized.
    pub spec: TransferSpec,
}

/// The `domain` object of the typed-data envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataDomain {
    /// Domain name (`"GatewayWallet"`).
    pub name: String,
    /// Domain version (`"1"`).
    pub version: String,
}

impl Default for TypedDataDomain {
    fn default() -> Self {
        Self {
            name: GATEWAY_DOMAIN_NAME.to_owned(),
            version: GATEWAY_DOMAIN_VERSION.to_owned(),
        }
    }
}

/// A single `{ name, type }` entry of a typed-data schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedDataField {
    /// Field name.
    pub name: String,
    /// Solidity type name.
    #[serde(rename = "type")]
    pub ty: String,
}

impl TypedDataField {
    fn from_layout(layout: &[(&str, &str)]) -> Vec<Self> {
        layout
            .iter()
            .map(|(name, ty)| Self {
                name: (*name).to_owned(),
                ty: (*ty).to_owned(),
            })
            .collect()
    }
}

/// The `types` object of the typed-data envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnIntentTypes {
    /// `EIP712Domain` fields.
    #[serde(rename = "EIP712Domain")]
    pub eip712_domain: Vec<TypedDataField>,
    /// `TransferSpec` fields.
    #[serde(rename = "TransferSpec")]
    pub transfer_spec: Vec<TypedDataField>,
    /// `BurnIntent` fields.
    #[serde(rename = "BurnIntent")]
    pub burn_intent: Vec<TypedDataField>,
}

impl Default for BurnIntentTypes {
    fn default() -> Self {
        Self {
            eip712_domain: TypedDataField::from_layout(&EIP712_DOMAIN_FIELDS),
            transfer_spec: TypedDataField::from_layout(&TRANSFER_SPEC_FIELDS),
            burn_intent: TypedDataField::from_layout(&BURN_INTENT_FIELDS),
        }
    }
}

impl BurnIntentTypes {
    /// Returns the EIP-712 `encodeType` string of the primary type:
    /// `BurnIntent(...)` followed by its referenced `TransferSpec(...)`.
    #[must_use]
    pub fn encode_type(&self) -> String {
        fn encode(name: &str, fields: &[TypedDataField]) -> String {
            let members: Vec<String> = fields
                .iter()
                .map(|field| format!("{} {}", field.ty, field.name))
                .collect();
            format!("{name}({})", members.join(","))
        }
        encode("BurnIntent", &self.burn_intent) + &encode("TransferSpec", &self.transfer_spec)
    }
}

/// A unit struct representing the string literal `"BurnIntent"`, the only
/// primary type Gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BurnIntentPrimaryType;

impl BurnIntentPrimaryType {
    /// The string literal value: `"BurnIntent"`.
    pub const VALUE: &'static str = "BurnIntent";
}

impl std::fmt::Display for BurnIntentPrimaryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::VALUE)
    }
}

impl Serialize for BurnIntentPrimaryType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(Self::VALUE)
    }
}

impl<'de> Deserialize<'de> for BurnIntentPrimaryType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == Self::VALUE {
            Ok(Self)
        } else {
            Err(serde::de::Error::custom(format!(
                "expected primaryType '{}', got '{s}'",
                Self::VALUE
            )))
        }
    }
}

/// EIP-712 typed-data envelope wrapping a [`BurnIntent`] for signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurnIntentTypedData {
    /// Gateway wallet domain.
    pub domain: TypedDataDomain,
    /// Type schema for the domain and both structs.
    pub types: BurnIntentTypes,
    /// Always `"BurnIntent"`.
    pub primary_type: BurnIntentPrimaryType,
    /// The burn intent to sign.
    pub message: BurnIntent,
}

impl BurnIntentTypedData {
    /// Wraps a burn intent in the Gateway typed-data envelope.
    #[must_use]
    pub fn new(message: BurnIntent) -> Self {
        Self {
            domain: TypedDataDomain::default(),
            types: BurnIntentTypes::default(),
            primary_type: BurnIntentPrimaryType,
            message,
        }
    }

    /// Computes the EIP-712 digest a wallet signs for this envelope.
    ///
    /// The hash is derived from the Solidity bindings in [`abi`], so it only
    /// matches what a wallet computes from [`Self::types`] while the schema is
    /// the Gateway one (see [`BurnIntentTypes::encode_type`]).
    #[must_use]
    pub fn signing_hash(&self) -> B256 {
        let domain = eip712_domain! {
            name: self.domain.name.clone(),
            version: self.domain.version.clone(),
        };
        abi::BurnIntent::from(&self.message).eip712_signing_hash(&domain)
    }

    /// Serializes the envelope into the JSON string that wallet
    /// `signTypedData` endpoints take as their `data` argument.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
