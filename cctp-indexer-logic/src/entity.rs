use alloy::primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::{message_id::MessageId, store::Entity};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    MessageReceived,
    MessageSent,
    Burn,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::MessageReceived => "message_received",
            EntityKind::MessageSent => "message_sent",
            EntityKind::Burn => "burn",
        }
    }
}

/// Destination-side receipt of a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReceivedRecord {
    pub id: MessageId,
    pub caller: Address,
    pub source_domain: u32,
    pub nonce: u64,
    pub sender: Address,
    pub message_body: Bytes,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

/// Source-side message addressed to the tracked domain. The latest event per
/// id wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSentRecord {
    pub id: MessageId,
    pub message: Bytes,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
    pub sender: Address,
    pub recipient: Address,
    /// keccak256 of `message`.
    pub attestation_hash: B256,
    /// Burned amount, copied from the burn in the same transaction if there was one.
    pub amount: Option<U256>,
    pub source_domain: u32,
    pub nonce: u64,
}

/// Keyed by the hash of the transaction that burned the tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnRecord {
    pub burner: Address,
    pub amount: U256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: B256,
}

impl Entity for MessageReceivedRecord {
    const KIND: EntityKind = EntityKind::MessageReceived;
    type Id = MessageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for MessageSentRecord {
    const KIND: EntityKind = EntityKind::MessageSent;
    type Id = MessageId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for BurnRecord {
    const KIND: EntityKind = EntityKind::Burn;
    type Id = B256;

    fn id(&self) -> &Self::Id {
        &self.transaction_hash
    }
}
