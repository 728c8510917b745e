use serde::{Deserialize, Serialize};

use super::CalendarDay;

/// Dense per-day mention counts ending at `today`.
///
/// Index 0 is `len - 1` days before `today`; the last index is `today`.
/// Days without mentions hold 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilledTimeline {
    today: CalendarDay,
    counts: Vec<u32>,
}

impl FilledTimeline {
    /// Wrap already-dense counts. The last entry is taken to be `today`.
    pub fn from_counts(today: CalendarDay, counts: Vec<u32>) -> Self {
        Self { today, counts }
    }

    pub fn today(&self) -> CalendarDay {
        self.today
    }

    /// First day covered by the timeline.
    pub fn start(&self) -> CalendarDay {
        self.day_at(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Calendar day of `index`. Indices past the end extrapolate forward.
    pub fn day_at(&self, index: usize) -> CalendarDay {
        let back = self.counts.len() as i64 - 1 - index as i64;
        self.today.add_days(-(back as i32))
    }

    /// `(day, count)` pairs, oldest first.
    pub fn iter_days(&self) -> impl Iterator<Item = (CalendarDay, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &count)| (self.day_at(i), count))
    }
}
