//! Ingestion of member records: distances, confidence statistics, family tally,
//! and annotation count.

use sieve_core::errors::{SieveError, SieveResult};
use sieve_core::models::{FamilyKey, RecordId};

use super::{Cluster, MemberRow};

/// Signals observed for one record at ingestion time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemberRecord {
    pub id: RecordId,
    /// Distance to the cluster centroid.
    pub distance: f64,
    /// Classifier per-class probabilities, when a classifier is in play.
    pub confidence: Option<Vec<f64>>,
    pub label: Option<String>,
    pub family: Option<String>,
    /// Whether the record already carries a human annotation.
    pub annotated: bool,
}

impl MemberRecord {
    pub fn new(id: RecordId, distance: f64) -> Self {
        Self {
            id,
            distance,
            ..Self::default()
        }
    }

    pub fn with_confidence(mut self, confidence: Vec<f64>) -> Self {
        self.confidence = Some(confidence);
        self
    }

    pub fn with_family(mut self, label: Option<&str>, family: &str) -> Self {
        self.label = label.map(str::to_string);
        self.family = Some(family.to_string());
        self
    }

    pub fn annotated(mut self) -> Self {
        self.annotated = true;
        self
    }
}

impl Cluster {
    /// Add one member record.
    ///
    /// Either every record of a cluster carries a confidence vector or none does;
    /// mixing the two is rejected.
    pub fn add(&mut self, record: MemberRecord) -> SieveResult<()> {
        if self.finalized {
            return Err(SieveError::precondition(format!(
                "cannot add record {} to a finalized cluster",
                record.id
            )));
        }
        if self.ids.contains(&record.id) {
            return Err(SieveError::precondition(format!(
                "record {} is already a member of the cluster",
                record.id
            )));
        }
        if let Some(first) = self.rows.first() {
            if first.probability.is_some() != record.confidence.is_some() {
                return Err(SieveError::precondition(format!(
                    "record {} mixes present and absent confidence vectors within one cluster",
                    record.id
                )));
            }
        }

        let (probability, entropy) = match &record.confidence {
            Some(confidence) => {
                let max = confidence
                    .iter()
                    .copied()
                    .reduce(f64::max)
                    .ok_or_else(|| {
                        SieveError::invalid_argument(format!(
                            "record {} has an empty confidence vector",
                            record.id
                        ))
                    })?;
                (Some(max), Some(shannon_entropy(confidence)?))
            }
            None => (None, None),
        };

        self.rows.push(MemberRow {
            id: record.id,
            distance: record.distance,
            probability,
            entropy,
            likelihood: None,
        });
        self.ids.insert(record.id);

        if let Some(family) = record.family.as_deref() {
            let key = FamilyKey::for_record(record.label.as_deref(), family);
            match self.family_tally.iter_mut().find(|(k, _)| *k == key) {
                Some((_, count)) => *count += 1,
                None => self.family_tally.push((key, 1)),
            }
        }

        if record.annotated {
            self.annotated_count += 1;
        }
        Ok(())
    }
}

/// Shannon entropy (natural log) of a probability vector.
///
/// The vector is normalized to sum to one first; zero components contribute nothing.
pub fn shannon_entropy(probabilities: &[f64]) -> SieveResult<f64> {
    if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(SieveError::invalid_argument(
            "confidence vector must hold finite non-negative values",
        ));
    }
    let total: f64 = probabilities.iter().sum();
    if total <= 0.0 {
        return Err(SieveError::invalid_argument(
            "confidence vector must have a positive sum",
        ));
    }
    Ok(probabilities
        .iter()
        .filter(|p| **p > 0.0)
        .map(|p| {
            let q = p / total;
            -q * q.ln()
        })
        .sum())
}
