use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FAMILY_KEY_SEPARATOR, UNKNOWN_LABEL};

/// Composite (label, family) key of the per-cluster family tally.
///
/// Kept as a pair so labels and families may contain the display separator
/// without becoming ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FamilyKey {
    pub label: String,
    pub family: String,
}

impl FamilyKey {
    pub fn new(label: impl Into<String>, family: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            family: family.into(),
        }
    }

    /// Build the key for a record, stringifying a missing label as `unknown`.
    pub fn for_record(label: Option<&str>, family: &str) -> Self {
        Self::new(label.unwrap_or(UNKNOWN_LABEL), family)
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.label, FAMILY_KEY_SEPARATOR, self.family)
    }
}
