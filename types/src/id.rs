//! Digital-ID identifier strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A digital-ID identifier: `TID-<6 digits>-<8 uppercase alphanumerics>`.
///
/// The digit segment is the trailing six digits of the issuance timestamp;
/// the suffix is random. Well-formedness is checkable, uniqueness is enforced
/// by the registry at generation time.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitalId(String);

impl DigitalId {
    pub const PREFIX: &'static str = "TID";

    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a string matches the `TID-DDDDDD-XXXXXXXX` shape.
    pub fn is_well_formed(s: &str) -> bool {
        let mut parts = s.split('-');
        let (Some(prefix), Some(digits), Some(suffix), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        prefix == Self::PREFIX
            && digits.len() == 6
            && digits.chars().all(|c| c.is_ascii_digit())
            && suffix.len() == 8
            && suffix.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }
}

impl fmt::Debug for DigitalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitalId({})", self.0)
    }
}

impl fmt::Display for DigitalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DigitalId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// Lets maps keyed by DigitalId be probed with a plain &str.
impl std::borrow::Borrow<str> for DigitalId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
