use crate::{
    abi::IMessageTransmitter::MessageReceived, codec, entity::MessageReceivedRecord,
    error::IndexerError, message::address_from_slot, message_id::MessageId,
    settings::CctpIndexerSettings, store::RecordStore, types::AnnotatedEvent,
};

use super::HandleOutcome;

pub(super) fn handle<S: RecordStore>(
    store: &mut S,
    settings: &CctpIndexerSettings,
    event: &AnnotatedEvent<MessageReceived>,
) -> Result<HandleOutcome, IndexerError> {
    let received = &event.event;
    let nonce_padded = codec::pad_nonce(received.nonce)?;
    let id = MessageId::new(received.sourceDomain, &nonce_padded);

    let existing: Option<MessageReceivedRecord> = store.get(&id).map_err(IndexerError::store)?;
    if settings.guard_received_overwrites
        && let Some(existing) = &existing
        && existing.block_timestamp > event.block_timestamp
    {
        tracing::debug!(
            message_id = %id,
            stored_timestamp = existing.block_timestamp,
            event_timestamp = event.block_timestamp,
            "skipping MessageReceived older than the stored one"
        );
        return Ok(HandleOutcome::DiscardedStale);
    }
    if existing.is_some() {
        tracing::debug!(message_id = %id, "overwriting stored MessageReceived");
    }

    let record = MessageReceivedRecord {
        id,
        caller: received.caller,
        source_domain: received.sourceDomain,
        nonce: received.nonce,
        sender: address_from_slot(&received.sender),
        message_body: received.messageBody.clone(),
        block_number: event.block_number,
        block_timestamp: event.block_timestamp,
        transaction_hash: event.transaction_hash,
    };
    store.set(&record).map_err(IndexerError::store)?;

    Ok(HandleOutcome::Accepted {
        replaced: existing.is_some(),
    })
}
