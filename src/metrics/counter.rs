use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::types::{RoundResult, StatusLabel};

const SLOT_COUNT: usize = StatusLabel::MAX_CODE as usize + 1;

/// Lock-free label counter shared by all tasks of a round.
///
/// One atomic slot per representable label, so concurrent completions never
/// contend on a lock and no increment is lost.
#[derive(Debug)]
pub struct RoundCounter {
    slots: Box<[AtomicU64]>,
}

impl Default for RoundCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundCounter {
    #[must_use]
    pub fn new() -> Self {
        let slots = (0..SLOT_COUNT).map(|_| AtomicU64::new(0)).collect();
        Self { slots }
    }

    pub fn record(&self, label: StatusLabel) {
        if let Some(slot) = self.slots.get(usize::from(label.code())) {
            slot.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.slots.iter().fold(0u64, |acc, slot| {
            acc.saturating_add(slot.load(Ordering::Acquire))
        })
    }

    /// Freezes the current counts. Call once every task of the round has
    /// been joined.
    #[must_use]
    pub fn snapshot(&self) -> RoundResult {
        let counts: BTreeMap<StatusLabel, u64> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(code, slot)| {
                let count = slot.load(Ordering::Acquire);
                if count == 0 {
                    return None;
                }
                let label = if code == 0 {
                    StatusLabel::FAILED
                } else {
                    StatusLabel::from_code(u16::try_from(code).ok()?)?
                };
                Some((label, count))
            })
            .collect();
        RoundResult::from_counts(counts)
    }
}
