use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("cannot left-pad {actual} bytes into {target} bytes")]
    InputTooLong { actual: usize, target: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageIdError {
    #[error("message id must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("message id has unknown tag byte {0:#04x}")]
    InvalidTag(u8),
}

/// Reasons a packed `MessageSent` payload is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("message is too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("message header does not match the expected tuple: {0}")]
    Abi(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl From<alloy::sol_types::Error> for DecodeError {
    fn from(err: alloy::sol_types::Error) -> Self {
        Self::Abi(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to (de)serialize {kind} record: {source}")]
    Serialization {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl IndexerError {
    pub(crate) fn store<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        IndexerError::Store(Box::new(err))
    }
}
