//! Selection engine: which members to surface to an annotator next.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sieve_core::errors::{SieveError, SieveResult};
use sieve_core::models::RecordId;
use tracing::debug;

use super::ordering::{sort_rows, Direction, MemberRow, SortKey};
use super::Cluster;

/// Strategy for picking members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Every member in canonical order; count and exclusions are ignored.
    All,
    /// Most typical members: highest likelihood, or the head of the canonical order.
    Center,
    /// Least typical members: lowest likelihood, or the tail of the canonical order.
    Anomalous,
    /// Uniform sample without replacement.
    Random,
    /// Highest entropy first.
    Uncertain,
}

impl SelectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Center => "center",
            Self::Anomalous => "anomalous",
            Self::Random => "random",
            Self::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "center" => Ok(Self::Center),
            "anomalous" => Ok(Self::Anomalous),
            "random" => Ok(Self::Random),
            "uncertain" => Ok(Self::Uncertain),
            other => Err(SieveError::invalid_argument(format!(
                "unknown selection mode '{other}'"
            ))),
        }
    }
}

impl Cluster {
    /// Select up to `count` members not in `exclude`.
    pub fn select(
        &self,
        mode: SelectionMode,
        count: usize,
        exclude: &HashSet<RecordId>,
    ) -> SieveResult<Vec<RecordId>> {
        self.select_with_rng(mode, count, exclude, &mut rand::thread_rng())
    }

    /// [`Cluster::select`] with the mode given by name.
    pub fn select_by_name(
        &self,
        mode: &str,
        count: usize,
        exclude: &HashSet<RecordId>,
    ) -> SieveResult<Vec<RecordId>> {
        self.select(mode.parse()?, count, exclude)
    }

    /// [`Cluster::select`] drawing random samples from `rng`.
    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        mode: SelectionMode,
        count: usize,
        exclude: &HashSet<RecordId>,
        rng: &mut R,
    ) -> SieveResult<Vec<RecordId>> {
        let _span = sieve_observability::selection_span!(mode, count, exclude.len()).entered();
        if !self.finalized {
            return Err(SieveError::precondition(format!(
                "cannot select {mode} members before the cluster is finalized"
            )));
        }

        if mode == SelectionMode::All {
            return Ok(self.members());
        }
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut candidates: Vec<MemberRow> = self
            .rows
            .iter()
            .filter(|r| !exclude.contains(&r.id))
            .copied()
            .collect();
        if candidates.len() < count {
            debug!(mode = %mode, count, available = candidates.len(), "fewer candidates than requested");
            return Ok(ids(&candidates));
        }

        let selected = match mode {
            SelectionMode::All => self.members(),
            SelectionMode::Center => {
                if self.likelihood_set {
                    sort_rows(&mut candidates, SortKey::Likelihood, Direction::Descending)?;
                }
                ids(&candidates[..count])
            }
            SelectionMode::Anomalous => {
                if self.likelihood_set {
                    sort_rows(&mut candidates, SortKey::Likelihood, Direction::Descending)?;
                }
                // Tail of the descending order, kept in that order: lowest last.
                ids(&candidates[candidates.len() - count..])
            }
            SelectionMode::Random => candidates
                .choose_multiple(rng, count)
                .map(|r| r.id)
                .collect(),
            SelectionMode::Uncertain => {
                sort_rows(&mut candidates, SortKey::Entropy, Direction::Descending)?;
                ids(&candidates[..count])
            }
        };
        Ok(selected)
    }
}

fn ids(rows: &[MemberRow]) -> Vec<RecordId> {
    rows.iter().map(|r| r.id).collect()
}
