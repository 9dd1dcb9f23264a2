pub mod abi;
pub mod codec;
mod entity;
mod error;
pub mod indexer;
pub mod message;
mod message_id;
pub mod metrics;
pub mod settings;
pub mod store;
#[cfg(test)]
mod test_utils;
pub mod types;

pub use entity::{BurnRecord, EntityKind, MessageReceivedRecord, MessageSentRecord};
pub use error::{CodecError, DecodeError, IndexerError, MessageIdError, StoreError};
pub use indexer::{CctpIndexer, HandleOutcome};
pub use message::DecodedMessage;
pub use message_id::MessageId;
pub use settings::CctpIndexerSettings;
pub use store::{Entity, InMemoryStore, RecordStore};
pub use types::{AnnotatedEvent, CctpEvent};
