//! Cryptographic hash types for blocks and identity records.
//!
//! Both types wrap a 32-byte SHA-256 digest and serialize as lowercase hex,
//! which is the on-the-wire representation everywhere in the service.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashParseError {
    #[error("expected 64 hex digits, got {0}")]
    Length(usize),

    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// A 32-byte block hash identifying a block in the chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHash([u8; 32]);

impl Default for BlockHash {
    fn default() -> Self {
        Self::ZERO
    }
}

impl BlockHash {
    /// All zeros, the default genesis previous-hash (64 hex zeros).
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Number of leading `'0'` digits in the hex representation.
    ///
    /// A block satisfies difficulty `d` when this count is at least `d`.
    pub fn leading_zero_digits(&self) -> u32 {
        let mut count = 0;
        for byte in &self.0 {
            if byte >> 4 != 0 {
                break;
            }
            count += 1;
            if byte & 0x0f != 0 {
                break;
            }
            count += 1;
        }
        count
    }

    pub fn parse_hex(s: &str) -> Result<Self, HashParseError> {
        Self::from_hex_str(s).map(Self)
    }

    fn from_hex_str(s: &str) -> Result<[u8; 32], HashParseError> {
        if s.len() != 64 {
            return Err(HashParseError::Length(s.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, chunk) in s.as_bytes().chunks(2).enumerate() {
            let hi = hex_digit(chunk[0] as char)?;
            let lo = hex_digit(chunk[1] as char)?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(bytes)
    }
}

fn hex_digit(c: char) -> Result<u8, HashParseError> {
    c.to_digit(16).map(|d| d as u8).ok_or(HashParseError::Digit(c))
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Serialize for BlockHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BlockHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(D::Error::custom)
    }
}

/// A 32-byte hash over the canonical serialization of an identity record.
///
/// Recomputed fresh on every verification, so any change to the record changes
/// the reported hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHash([u8; 32]);

impl RecordHash {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordHash(")?;
        for b in &self.0[..4] {
            write!(f, "{:02x}", b)?;
        }
        write!(f, "\u{2026})")
    }
}

impl fmt::Display for RecordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Serialize for RecordHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        BlockHash::from_hex_str(&s).map(Self).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hash_has_64_leading_zeros() {
        assert_eq!(BlockHash::ZERO.leading_zero_digits(), 64);
        assert_eq!(BlockHash::ZERO.to_string(), "0".repeat(64));
    }

    #[test]
    fn leading_zeros_counts_nibbles() {
        let mut bytes = [0u8; 32];
        bytes[2] = 0x0a; // 0000 0a.. => five zero digits
        assert_eq!(BlockHash::new(bytes).leading_zero_digits(), 5);

        bytes[2] = 0xa0;
        assert_eq!(BlockHash::new(bytes).leading_zero_digits(), 4);
    }

    #[test]
    fn parse_hex_round_trip() {
        let h = BlockHash::new([0xab; 32]);
        let parsed = BlockHash::parse_hex(&h.to_string()).unwrap();
        assert_eq!(h, parsed);
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert!(matches!(
            BlockHash::parse_hex("abcd"),
            Err(HashParseError::Length(4))
        ));
        assert!(matches!(
            BlockHash::parse_hex(&"zz".repeat(32)),
            Err(HashParseError::Digit('z'))
        ));
    }

    #[test]
    fn serializes_as_hex_string() {
        let h = BlockHash::new([0x01; 32]);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, format!("\"{}\"", "01".repeat(32)));
        let back: BlockHash = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
