//! Stable ordering of member rows by one scalar signal.
//!
//! All signals of a member travel together in one row, so reordering by any key
//! permutes every other signal in lock-step.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use sieve_core::errors::{SieveError, SieveResult};
use sieve_core::models::RecordId;

/// Every signal known for one member.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberRow {
    pub id: RecordId,
    pub distance: f64,
    pub probability: Option<f64>,
    pub entropy: Option<f64>,
    pub likelihood: Option<f64>,
}

/// Column to order rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Distance,
    Probability,
    Entropy,
    Likelihood,
}

impl SortKey {
    pub fn name(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Probability => "probability",
            Self::Entropy => "entropy",
            Self::Likelihood => "likelihood",
        }
    }

    fn value(self, row: &MemberRow) -> Option<f64> {
        match self {
            Self::Distance => Some(row.distance),
            Self::Probability => row.probability,
            Self::Entropy => row.entropy,
            Self::Likelihood => row.likelihood,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Sort rows by `key`. Ties keep their original relative order in both directions.
///
/// Fails without reordering anything if some row lacks the key.
pub fn sort_rows(rows: &mut [MemberRow], key: SortKey, direction: Direction) -> SieveResult<()> {
    if let Some(row) = rows.iter().find(|r| key.value(r).is_none()) {
        return Err(SieveError::precondition(format!(
            "record {} has no {} value",
            row.id,
            key.name()
        )));
    }
    rows.sort_by(|a, b| {
        let ord = compare(key.value(a), key.value(b));
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
    Ok(())
}

fn compare(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        _ => Ordering::Equal,
    }
}
