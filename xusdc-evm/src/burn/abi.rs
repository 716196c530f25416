//! Solidity bindings of the Gateway EIP-712 structs.
//!
//! Used to compute struct hashes and signing digests; the JSON-facing types
//! live in [`super::types`].

use alloy_sol_types::sol;

use super::types;

sol!(
    /// Gateway `TransferSpec` struct.
    ///
    /// Field order MUST match the on-chain `GatewayWallet` definition.
    struct TransferSpec {
        uint32 version;
        uint32 sourceDomain;
        uint32 destinationDomain;
        bytes32 sourceContract;
        bytes32 destinationContract;
        bytes32 sourceToken;
        bytes32 destinationToken;
        bytes32 sourceDepositor;
        bytes32 destinationRecipient;
        bytes32 sourceSigner;
        bytes32 destinationCaller;
        uint256 value;
        bytes32 salt;
        bytes hookData;
    }

    /// Gateway `BurnIntent` struct, the EIP-712 primary type.
    struct BurnIntent {
        uint256 maxBlockHeight;
        uint256 maxFee;
        TransferSpec spec;
    }
);

impl From<&types::TransferSpec> for TransferSpec {
    fn from(spec: &types::TransferSpec) -> Self {
        Self {
            version: spec.version,
            sourceDomain: spec.source_domain,
            destinationDomain: spec.destination_domain,
            sourceContract: spec.source_contract,
            destinationContract: spec.destination_contract,
            sourceToken: spec.source_token,
            destinationToken: spec.destination_token,
            sourceDepositor: spec.source_depositor,
            destinationRecipient: spec.destination_recipient,
            sourceSigner: spec.source_signer,
            destinationCaller: spec.destination_caller,
            value: spec.value,
            salt: spec.salt,
            hookData: spec.hook_data.clone(),
        }
    }
}

impl From<&types::BurnIntent> for BurnIntent {
    fn from(intent: &types::BurnIntent) -> Self {
        Self {
            maxBlockHeight: intent.max_block_height,
            maxFee: intent.max_fee,
            spec: TransferSpec::from(&intent.spec),
        }
    }
}
