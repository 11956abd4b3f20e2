use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FamilyKey;
use crate::constants::{FAMILY_KEY_SEPARATOR, UNKNOWN_CLUSTER_PREFIX};

/// Resolved consensus label of a cluster.
///
/// Serialized as its display string; parsing that string back always
/// reproduces the same display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClusterLabel {
    /// The dominant (label, family) pair of the cluster's tally.
    Family(FamilyKey),
    /// Placeholder for a cluster with no family information, numbered by the
    /// run-wide unknown-cluster counter.
    Unknown(u64),
    /// A transport label that is neither of the forms above.
    Opaque(String),
}

impl ClusterLabel {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    pub fn family_key(&self) -> Option<&FamilyKey> {
        match self {
            Self::Family(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Family(key) => key.fmt(f),
            Self::Unknown(n) => write!(f, "{UNKNOWN_CLUSTER_PREFIX}{n}"),
            Self::Opaque(s) => f.write_str(s),
        }
    }
}

impl FromStr for ClusterLabel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digits) = s.strip_prefix(UNKNOWN_CLUSTER_PREFIX) {
            // Only canonical numbers, so "unknown_007" keeps its exact spelling.
            if let Ok(n) = digits.parse::<u64>() {
                if n.to_string() == digits {
                    return Ok(Self::Unknown(n));
                }
            }
        }
        Ok(match s.split_once(FAMILY_KEY_SEPARATOR) {
            Some((label, family)) => Self::Family(FamilyKey::new(label, family)),
            None => Self::Opaque(s.to_string()),
        })
    }
}

impl From<String> for ClusterLabel {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(label) => label,
            Err(never) => match never {},
        }
    }
}

impl From<ClusterLabel> for String {
    fn from(label: ClusterLabel) -> Self {
        label.to_string()
    }
}
