use alloy::primitives::keccak256;

use crate::{
    abi::IMessageTransmitter::MessageSent, entity::MessageSentRecord, error::IndexerError, message,
    message_id::MessageId, metrics, settings::CctpIndexerSettings, store::RecordStore,
    types::AnnotatedEvent,
};

use super::{HandleOutcome, burn};

pub(super) fn handle<S: RecordStore>(
    store: &mut S,
    settings: &CctpIndexerSettings,
    event: &AnnotatedEvent<MessageSent>,
) -> Result<HandleOutcome, IndexerError> {
    let payload = &event.event.message;
    let decoded = match message::decode(payload) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(
                err = %err,
                transaction_hash = %event.transaction_hash,
                "failed to decode MessageSent payload, skipping"
            );
            return Ok(HandleOutcome::Malformed(err));
        }
    };

    if decoded.destination_domain != settings.tracked_domain {
        tracing::debug!(
            destination_domain = decoded.destination_domain,
            tracked_domain = settings.tracked_domain,
            "skipping MessageSent addressed to another domain"
        );
        return Ok(HandleOutcome::DiscardedWrongDomain {
            destination_domain: decoded.destination_domain,
        });
    }

    let id = MessageId::new(decoded.source_domain, &decoded.nonce_padded);

    // Several MessageSent events share an id when a message is replaced, and
    // they may arrive in any order. Only the most recent one is kept.
    let existing: Option<MessageSentRecord> = store.get(&id).map_err(IndexerError::store)?;
    if let Some(existing) = &existing
        && existing.block_timestamp > event.block_timestamp
    {
        tracing::debug!(
            message_id = %id,
            stored_timestamp = existing.block_timestamp,
            event_timestamp = event.block_timestamp,
            "skipping MessageSent older than the stored one"
        );
        return Ok(HandleOutcome::DiscardedStale);
    }

    // The burn is emitted before MessageSent in the same transaction, except
    // for replaceDepositForBurn which emits no burn at all.
    let amount = burn::correlated_amount(store, &event.transaction_hash)?;
    if amount.is_none() {
        metrics::UNCORRELATED_SENT_TOTAL.inc();
        tracing::warn!(
            message_id = %id,
            transaction_hash = %event.transaction_hash,
            "no Burn stored before MessageSent"
        );
    }

    let record = MessageSentRecord {
        id,
        message: payload.clone(),
        block_number: event.block_number,
        block_timestamp: event.block_timestamp,
        transaction_hash: event.transaction_hash,
        sender: event.transaction_from,
        recipient: decoded.recipient,
        attestation_hash: keccak256(payload),
        amount,
        source_domain: decoded.source_domain,
        nonce: decoded.nonce,
    };
    store.set(&record).map_err(IndexerError::store)?;

    Ok(HandleOutcome::Accepted {
        replaced: existing.is_some(),
    })
}
