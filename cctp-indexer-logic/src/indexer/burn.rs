use alloy::primitives::{B256, U256};

use crate::{
    abi::IFiatToken::Burn, entity::BurnRecord, error::IndexerError, store::RecordStore,
    types::AnnotatedEvent,
};

use super::HandleOutcome;

pub(super) fn handle<S: RecordStore>(
    store: &mut S,
    event: &AnnotatedEvent<Burn>,
) -> Result<HandleOutcome, IndexerError> {
    let replaced = store
        .get::<BurnRecord>(&event.transaction_hash)
        .map_err(IndexerError::store)?
        .is_some();

    let record = BurnRecord {
        burner: event.event.burner,
        amount: event.event.amount,
        block_number: event.block_number,
        block_timestamp: event.block_timestamp,
        transaction_hash: event.transaction_hash,
    };
    store.set(&record).map_err(IndexerError::store)?;

    Ok(HandleOutcome::Accepted { replaced })
}

/// Amount burned in `transaction_hash`, if a burn from that transaction was stored.
pub(super) fn correlated_amount<S: RecordStore>(
    store: &S,
    transaction_hash: &B256,
) -> Result<Option<U256>, IndexerError> {
    let burn = store
        .get::<BurnRecord>(transaction_hash)
        .map_err(IndexerError::store)?;
    Ok(burn.map(|burn| burn.amount))
}
