use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::abi::{IFiatToken, IMessageTransmitter};

/// A decoded contract event together with its block and transaction context.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotatedEvent<T> {
    pub event: T,
    pub block_number: u64,
    /// Unix seconds.
    pub block_timestamp: u64,
    pub transaction_hash: B256,
    /// Originator of the transaction that emitted the event.
    pub transaction_from: Address,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CctpEvent {
    Received(AnnotatedEvent<IMessageTransmitter::MessageReceived>),
    Sent(AnnotatedEvent<IMessageTransmitter::MessageSent>),
    Burn(AnnotatedEvent<IFiatToken::Burn>),
}

impl CctpEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            CctpEvent::Received(_) => "received",
            CctpEvent::Sent(_) => "sent",
            CctpEvent::Burn(_) => "burn",
        }
    }

    pub fn transaction_hash(&self) -> B256 {
        match self {
            CctpEvent::Received(e) => e.transaction_hash,
            CctpEvent::Sent(e) => e.transaction_hash,
            CctpEvent::Burn(e) => e.transaction_hash,
        }
    }
}
