use alloy::primitives::{Address, B256, Bytes, U256, address, hex};

use crate::{
    abi::{IFiatToken, IMessageTransmitter},
    types::AnnotatedEvent,
};

pub const TX_FROM: Address = address!("0xa16081f360e3847006db660bae1c6d1b2e17ec2a");

/// A captured Base -> Arbitrum burn message with domains and nonce overwritten.
pub fn packed_message(source_domain: u32, destination_domain: u32, nonce: u64) -> Vec<u8> {
    let mut message = hex!(
        "000000000000000600000003000000000003902D"
        "000000000000000000000000D0C3DA58F55358142B8D3E06C1C30C5C6114EFE8"
        "000000000000000000000000EB08F243E5D3FCFF26A9E38AE5520A669F4019D0"
        "0000000000000000000000000000000000000000000000000000000000000000"
        "00000000"
        "00000000000000000000000007865C6E87B9F70255377E024ACE6630C1EAA37F"
        "000000000000000000000000B28CB81B1C50539AE1E941573EBA241E47F6DE5A"
        "00000000000000000000000000000000000000000000000000000000000F4240"
        "0000000000000000000000003A554156AEA1921ABB277F63D6109CA81B530A3E"
    )
    .to_vec();
    message[4..8].copy_from_slice(&source_domain.to_be_bytes());
    message[8..12].copy_from_slice(&destination_domain.to_be_bytes());
    message[12..20].copy_from_slice(&nonce.to_be_bytes());
    message
}

pub fn annotate<T>(event: T, tx: u8, block_timestamp: u64) -> AnnotatedEvent<T> {
    AnnotatedEvent {
        event,
        block_number: block_timestamp / 12,
        block_timestamp,
        transaction_hash: B256::repeat_byte(tx),
        transaction_from: TX_FROM,
    }
}

pub fn sent_event(
    message: Vec<u8>,
    tx: u8,
    block_timestamp: u64,
) -> AnnotatedEvent<IMessageTransmitter::MessageSent> {
    annotate(
        IMessageTransmitter::MessageSent {
            message: message.into(),
        },
        tx,
        block_timestamp,
    )
}

pub fn received_event(
    source_domain: u32,
    nonce: u64,
    tx: u8,
    block_timestamp: u64,
) -> AnnotatedEvent<IMessageTransmitter::MessageReceived> {
    annotate(
        IMessageTransmitter::MessageReceived {
            caller: address!("0x0000000000000000000000000000000000000001"),
            sourceDomain: source_domain,
            nonce,
            sender: address!("0x0000000000000000000000000000000000000002").into_word(),
            messageBody: Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]),
        },
        tx,
        block_timestamp,
    )
}

pub fn burn_event(amount: u64, tx: u8, block_timestamp: u64) -> AnnotatedEvent<IFiatToken::Burn> {
    annotate(
        IFiatToken::Burn {
            burner: TX_FROM,
            amount: U256::from(amount),
        },
        tx,
        block_timestamp,
    )
}
