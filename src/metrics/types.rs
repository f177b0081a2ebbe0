use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

/// Bucket a request outcome is counted under.
///
/// Either an HTTP status code (100..=999) or the transport-failure sentinel,
/// which renders as `000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusLabel(u16);

impl StatusLabel {
    /// Label for requests that never produced a status (timeout, refused
    /// connection, TLS failure, broken body).
    pub const FAILED: StatusLabel = StatusLabel(0);
    /// Largest code a label can carry.
    pub(crate) const MAX_CODE: u16 = 999;

    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        StatusLabel(status.as_u16())
    }

    /// Builds a label from a raw code; codes outside 100..=999 are not
    /// representable and yield `None`.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        if code >= 100 && code <= Self::MAX_CODE {
            Some(StatusLabel(code))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl Serialize for StatusLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Frozen label counts of one finished round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoundResult {
    counts: BTreeMap<StatusLabel, u64>,
}

impl RoundResult {
    pub(crate) const fn from_counts(counts: BTreeMap<StatusLabel, u64>) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn count(&self, label: StatusLabel) -> u64 {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    /// Number of requests the round dispatched.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Labels with their counts, ordered by label.
    pub fn iter(&self) -> impl Iterator<Item = (StatusLabel, u64)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (label, count) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", label, count)?;
            first = false;
        }
        Ok(())
    }
}

/// Results of every round, indexed by round number (0-based).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BenchmarkResult {
    rounds: Vec<RoundResult>,
}

impl BenchmarkResult {
    #[must_use]
    pub fn with_capacity(rounds: usize) -> Self {
        Self {
            rounds: Vec::with_capacity(rounds),
        }
    }

    pub(crate) fn push(&mut self, round: RoundResult) {
        self.rounds.push(round);
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Label counts summed over all rounds.
    #[must_use]
    pub fn totals(&self) -> RoundResult {
        let mut counts: BTreeMap<StatusLabel, u64> = BTreeMap::new();
        for round in &self.rounds {
            for (label, count) in round.iter() {
                let entry = counts.entry(label).or_insert(0);
                *entry = entry.saturating_add(count);
            }
        }
        RoundResult::from_counts(counts)
    }
}
