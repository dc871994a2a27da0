//! Lifecycle transactions recorded on the chain.

use serde::{Deserialize, Serialize};
use tourid_types::{DigitalId, RecordHash, Timestamp};

/// A recorded lifecycle event awaiting (or sealed into) a block.
///
/// Immutable once created; ownership moves from the creator through the
/// pending pool into the block that absorbs it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transaction {
    /// A digital ID was issued.
    CreateId {
        digital_id: DigitalId,
        /// Canonical hash of the identity record at issuance time.
        data_hash: RecordHash,
        timestamp: Timestamp,
    },
    /// A digital ID was revoked.
    RevokeId {
        digital_id: DigitalId,
        reason: String,
        revoked_by: String,
        timestamp: Timestamp,
    },
}

impl Transaction {
    pub fn digital_id(&self) -> &DigitalId {
        match self {
            Self::CreateId { digital_id, .. } => digital_id,
            Self::RevokeId { digital_id, .. } => digital_id,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::CreateId { timestamp, .. } => *timestamp,
            Self::RevokeId { timestamp, .. } => *timestamp,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateId { .. } => "create_id",
            Self::RevokeId { .. } => "revoke_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourid_types::RecordHash;

    #[test]
    fn serializes_with_type_tag() {
        let tx = Transaction::CreateId {
            digital_id: DigitalId::from("TID-123456-ABCD1234"),
            data_hash: RecordHash::new([7u8; 32]),
            timestamp: Timestamp::new(42),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "create_id");
        assert_eq!(json["digital_id"], "TID-123456-ABCD1234");
        assert_eq!(json["timestamp"], 42);
    }

    #[test]
    fn accessors_cover_both_variants() {
        let revoke = Transaction::RevokeId {
            digital_id: DigitalId::from("TID-000001-AAAA0000"),
            reason: "lost".into(),
            revoked_by: "desk-3".into(),
            timestamp: Timestamp::new(7),
        };
        assert_eq!(revoke.kind(), "revoke_id");
        assert_eq!(revoke.digital_id().as_str(), "TID-000001-AAAA0000");
        assert_eq!(revoke.timestamp(), Timestamp::new(7));
    }
}
