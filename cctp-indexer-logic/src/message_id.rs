use std::fmt;

use alloy::primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};

use crate::error::MessageIdError;

/// Tag byte in front of every identifier.
const TAG: u8 = 0x00;
const DOMAIN_LEN: usize = 4;
const LEN: usize = 1 + DOMAIN_LEN + 32;

/// Cross-chain identifier of a CCTP message, shared by both legs of a transfer.
///
/// Encoded as `0x00 || be32(source_domain) || nonce_word` (37 bytes). The
/// encoding is fixed-width so that no two (domain, nonce) pairs can collide,
/// and it must never change for an existing pair.
///
/// Deserialization rejects anything that is not a well-formed id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Bytes", into = "Bytes")]
pub struct MessageId(Bytes);

impl MessageId {
    pub fn new(source_domain: u32, nonce_padded: &B256) -> Self {
        let mut id = Vec::with_capacity(LEN);
        id.push(TAG);
        id.extend_from_slice(&source_domain.to_be_bytes());
        id.extend_from_slice(nonce_padded.as_slice());
        Self(id.into())
    }

    pub fn source_domain(&self) -> u32 {
        let mut domain = [0u8; DOMAIN_LEN];
        domain.copy_from_slice(&self.0[1..1 + DOMAIN_LEN]);
        u32::from_be_bytes(domain)
    }

    pub fn nonce(&self) -> B256 {
        B256::from_slice(&self.0[1 + DOMAIN_LEN..])
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }
}

impl TryFrom<Bytes> for MessageId {
    type Error = MessageIdError;

    fn try_from(id: Bytes) -> Result<Self, Self::Error> {
        if id.len() != LEN {
            return Err(MessageIdError::InvalidLength {
                expected: LEN,
                actual: id.len(),
            });
        }
        if id[0] != TAG {
            return Err(MessageIdError::InvalidTag(id[0]));
        }
        Ok(Self(id))
    }
}

impl From<MessageId> for Bytes {
    fn from(id: MessageId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for MessageId {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pad_nonce;
    use alloy::primitives::{U256, hex};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn layout_is_tag_domain_nonce() {
        let id = MessageId::new(3, &pad_nonce(0x3902d).unwrap());
        assert_eq!(
            id.as_bytes().as_ref(),
            hex!(
                "00"
                "00000003"
                "000000000000000000000000000000000000000000000000000000000003902d"
            )
            .as_slice()
        );
        assert_eq!(id.source_domain(), 3);
        assert_eq!(
            id.nonce(),
            B256::from(U256::from(0x3902d_u64).to_be_bytes::<32>())
        );
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 0)]
    #[case(6, 233_517)]
    #[case(u32::MAX, u64::MAX)]
    fn derivation_is_deterministic(#[case] domain: u32, #[case] nonce: u64) {
        let nonce = pad_nonce(nonce).unwrap();
        let first = MessageId::new(domain, &nonce);
        let second = MessageId::new(domain, &nonce);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn decimal_concatenation_ambiguity_does_not_collide() {
        // "1" ++ "23" and "12" ++ "3" would collide if rendered as text.
        let a = MessageId::new(1, &pad_nonce(23).unwrap());
        let b = MessageId::new(12, &pad_nonce(3).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_prefixed_hex() {
        let id = MessageId::new(1, &pad_nonce(1).unwrap());
        assert_eq!(
            id.to_string(),
            "0x00000000010000000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn serde_round_trips_as_hex() {
        let id = MessageId::new(6, &pad_nonce(233_517).unwrap());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        assert_eq!(serde_json::from_str::<MessageId>(&json).unwrap(), id);
    }

    #[rstest]
    #[case::empty("0x", MessageIdError::InvalidLength { expected: 37, actual: 0 })]
    #[case::short("0x0001", MessageIdError::InvalidLength { expected: 37, actual: 2 })]
    #[case::long(
        "0x00000000010000000000000000000000000000000000000000000000000000000000000001ff",
        MessageIdError::InvalidLength { expected: 37, actual: 38 }
    )]
    #[case::bad_tag(
        "0x01000000010000000000000000000000000000000000000000000000000000000000000001",
        MessageIdError::InvalidTag(0x01)
    )]
    fn malformed_ids_are_rejected(#[case] encoded: &str, #[case] expected: MessageIdError) {
        let bytes: Bytes = encoded.parse().unwrap();
        assert_eq!(MessageId::try_from(bytes), Err(expected));

        let json = format!("\"{encoded}\"");
        assert!(serde_json::from_str::<MessageId>(&json).is_err());
    }
}
