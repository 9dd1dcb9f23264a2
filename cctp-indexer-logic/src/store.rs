//! Keyed record storage consumed by the indexer.

use std::collections::BTreeMap;

use alloy::hex;
use serde::{Serialize, de::DeserializeOwned};

use crate::{entity::EntityKind, error::StoreError};

/// A record kind persisted under its own key space.
pub trait Entity: Serialize + DeserializeOwned {
    const KIND: EntityKind;
    type Id: AsRef<[u8]>;

    fn id(&self) -> &Self::Id;
}

/// Keyed get/set with overwrite semantics. No multi-key atomicity is assumed.
pub trait RecordStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, Self::Error>;
    fn set<E: Entity>(&mut self, record: &E) -> Result<(), Self::Error>;
}

/// Stores records as field maps (`serde_json::Value`) per entity kind.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    tables: BTreeMap<EntityKind, BTreeMap<Vec<u8>, serde_json::Value>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.tables.get(&kind).map_or(0, BTreeMap::len)
    }

    /// All records of one kind, ordered by key.
    pub fn all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        self.tables
            .get(&E::KIND)
            .into_iter()
            .flat_map(BTreeMap::values)
            .map(|value| from_value::<E>(value.clone()))
            .collect()
    }

    /// JSON dump of the whole store: `{ kind: { "0x<key>": record } }`.
    pub fn snapshot(&self) -> serde_json::Value {
        let mut tables = serde_json::Map::new();
        for (kind, records) in &self.tables {
            let records = records
                .iter()
                .map(|(key, value)| (hex::encode_prefixed(key), value.clone()))
                .collect::<serde_json::Map<_, _>>();
            tables.insert(kind.as_str().to_string(), records.into());
        }
        serde_json::Value::Object(tables)
    }
}

impl RecordStore for InMemoryStore {
    type Error = StoreError;

    fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, Self::Error> {
        self.tables
            .get(&E::KIND)
            .and_then(|records| records.get(id.as_ref()))
            .map(|value| from_value::<E>(value.clone()))
            .transpose()
    }

    fn set<E: Entity>(&mut self, record: &E) -> Result<(), Self::Error> {
        let value = serde_json::to_value(record).map_err(|source| StoreError::Serialization {
            kind: E::KIND.as_str(),
            source,
        })?;
        self.tables
            .entry(E::KIND)
            .or_default()
            .insert(record.id().as_ref().to_vec(), value);
        Ok(())
    }
}

fn from_value<E: Entity>(value: serde_json::Value) -> Result<E, StoreError> {
    serde_json::from_value(value).map_err(|source| StoreError::Serialization {
        kind: E::KIND.as_str(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BurnRecord, MessageId, MessageReceivedRecord};
    use alloy::primitives::{Address, B256, Bytes, U256, address};
    use pretty_assertions::assert_eq;

    fn burn(tx: u8, amount: u64) -> BurnRecord {
        BurnRecord {
            burner: address!("0x00000000000000000000000000000000000000b1"),
            amount: U256::from(amount),
            block_number: 10,
            block_timestamp: 1_700_000_000,
            transaction_hash: B256::repeat_byte(tx),
        }
    }

    fn receipt(id: MessageId) -> MessageReceivedRecord {
        MessageReceivedRecord {
            id,
            caller: Address::ZERO,
            source_domain: 1,
            nonce: 0,
            sender: Address::ZERO,
            message_body: Bytes::new(),
            block_number: 1,
            block_timestamp: 1,
            transaction_hash: B256::ZERO,
        }
    }

    #[test]
    fn get_returns_what_was_set() {
        let mut store = InMemoryStore::new();
        let record = burn(0x11, 1_000_000);
        store.set(&record).unwrap();

        let loaded: Option<BurnRecord> = store.get(&B256::repeat_byte(0x11)).unwrap();
        assert_eq!(loaded, Some(record));
        assert_eq!(store.count(EntityKind::Burn), 1);
    }

    #[test]
    fn get_missing_is_none() {
        let store = InMemoryStore::new();
        let loaded: Option<BurnRecord> = store.get(&B256::repeat_byte(0x11)).unwrap();
        assert_eq!(loaded, None);
        assert_eq!(store.count(EntityKind::Burn), 0);
    }

    #[test]
    fn set_overwrites_same_id() {
        let mut store = InMemoryStore::new();
        store.set(&burn(0x11, 1)).unwrap();
        store.set(&burn(0x11, 2)).unwrap();
        store.set(&burn(0x22, 3)).unwrap();

        assert_eq!(store.count(EntityKind::Burn), 2);
        let amounts = store
            .all::<BurnRecord>()
            .unwrap()
            .into_iter()
            .map(|b| b.amount)
            .collect::<Vec<_>>();
        assert_eq!(amounts, vec![U256::from(2), U256::from(3)]);
    }

    #[test]
    fn kinds_do_not_share_keys() {
        let mut store = InMemoryStore::new();
        let id = MessageId::new(1, &B256::ZERO);
        store.set(&receipt(id.clone())).unwrap();

        let sent: Option<crate::MessageSentRecord> = store.get(&id).unwrap();
        assert_eq!(sent, None);
        assert_eq!(store.count(EntityKind::MessageReceived), 1);
        assert_eq!(store.count(EntityKind::MessageSent), 0);
    }

    #[test]
    fn snapshot_groups_records_by_kind() {
        let mut store = InMemoryStore::new();
        store.set(&burn(0x11, 1)).unwrap();

        let snapshot = store.snapshot();
        let key = format!("0x{}", "11".repeat(32));
        let burner = snapshot["burn"][key.as_str()]["burner"].clone();
        let burner: Address = serde_json::from_value(burner).unwrap();
        assert_eq!(burner, address!("0x00000000000000000000000000000000000000b1"));
    }

    #[test]
    fn corrupted_id_is_a_store_error() {
        let mut store = InMemoryStore::new();
        let id = MessageId::new(1, &B256::ZERO);
        store.set(&receipt(id.clone())).unwrap();

        let row = store
            .tables
            .get_mut(&EntityKind::MessageReceived)
            .and_then(|records| records.get_mut(id.as_ref()))
            .unwrap();
        row["id"] = serde_json::json!("0x0001");

        let loaded = store.get::<MessageReceivedRecord>(&id);
        assert!(matches!(
            loaded,
            Err(StoreError::Serialization {
                kind: "message_received",
                ..
            })
        ));
    }
}
