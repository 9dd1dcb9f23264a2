//! Decoding of the packed CCTP message carried by `MessageSent`.
//!
//! Layout (big-endian, `abi.encodePacked`):
//!
//! | offset  | field              | size |
//! |---------|--------------------|------|
//! | 0..4    | version            | 4    |
//! | 4..8    | sourceDomain       | 4    |
//! | 8..12   | destinationDomain  | 4    |
//! | 12..20  | nonce              | 8    |
//! | 20..52  | sender             | 32   |
//! | 52..84  | recipient          | 32   |
//! | 84..116 | destinationCaller  | 32   |
//! | 116..   | messageBody        | rest |
//!
//! See <https://developers.circle.com/stablecoin/docs/cctp-technical-reference#message>.

use alloy::{
    primitives::{Address, B256, Bytes},
    sol_types::SolType,
};

use crate::{abi::PaddedMessageHeader, codec, error::DecodeError};

const VERSION: std::ops::Range<usize> = 0..4;
const SOURCE_DOMAIN: std::ops::Range<usize> = 4..8;
const DESTINATION_DOMAIN: std::ops::Range<usize> = 8..12;
const NONCE: std::ops::Range<usize> = 12..20;
const FIXED_HEADER_LEN: usize = 20;
/// Recipient address inside the 32-byte recipient slot of the packed message.
const RECIPIENT_ADDRESS: std::ops::Range<usize> = 64..84;
const MESSAGE_BODY_OFFSET: usize = 116;

/// Bytes a 32-byte address slot carries in front of the 20-byte address.
pub const ADDRESS_SLOT_PADDING: usize = 12;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedMessage {
    pub version: u32,
    pub source_domain: u32,
    pub destination_domain: u32,
    pub nonce: u64,
    /// Nonce field of the packed message, left-padded to a word.
    pub nonce_padded: B256,
    pub sender: B256,
    pub recipient: Address,
    pub destination_caller: B256,
    pub message_body: Bytes,
}

impl DecodedMessage {
    pub fn sender_address(&self) -> Address {
        address_from_slot(&self.sender)
    }
}

/// Recovers the address right-aligned in a 32-byte slot.
pub fn address_from_slot(slot: &B256) -> Address {
    Address::from_slice(&slot[ADDRESS_SLOT_PADDING..])
}

/// Widens the four packed integers of `message` to full words and appends the
/// rest of the message unchanged, producing an ABI tuple-compatible buffer.
pub fn normalize(message: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if message.len() < FIXED_HEADER_LEN {
        return Err(DecodeError::TooShort {
            expected: FIXED_HEADER_LEN,
            actual: message.len(),
        });
    }

    let mut normalized = Vec::with_capacity(4 * codec::WORD + message.len() - FIXED_HEADER_LEN);
    for field in [VERSION, SOURCE_DOMAIN, DESTINATION_DOMAIN, NONCE] {
        normalized.extend_from_slice(codec::left_pad_word(&message[field])?.as_slice());
    }
    normalized.extend_from_slice(&message[FIXED_HEADER_LEN..]);
    Ok(normalized)
}

/// Decodes a packed `MessageSent` payload.
pub fn decode(message: &[u8]) -> Result<DecodedMessage, DecodeError> {
    let normalized = normalize(message)?;
    let header = PaddedMessageHeader::abi_decode(&normalized)?;

    // The header decoded, so the message spans at least all fixed-width slots.
    let message_body = message
        .get(MESSAGE_BODY_OFFSET..)
        .map(Bytes::copy_from_slice)
        .unwrap_or_default();

    Ok(DecodedMessage {
        version: header.version,
        source_domain: header.sourceDomain,
        destination_domain: header.destinationDomain,
        nonce: header.nonce,
        nonce_padded: codec::left_pad_word(&message[NONCE])?,
        sender: header.sender,
        recipient: Address::from_slice(&message[RECIPIENT_ADDRESS]),
        destination_caller: header.destinationCaller,
        message_body,
    })
}
