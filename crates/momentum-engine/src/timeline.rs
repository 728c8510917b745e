//! Sparse-to-dense timeline reconstruction.

use momentum_core::types::{CalendarDay, FilledTimeline, Mention};

/// Place sparse mentions into a dense `window_days`-long array ending at `today`.
///
/// Mentions before the window are skipped. Mentions after `today` are
/// clock-skew noise and are dropped. Same-day entries are summed.
/// The result always has exactly `window_days` entries.
pub fn build_timeline(sparse: &[Mention], window_days: usize, today: CalendarDay) -> FilledTimeline {
    let mut counts = vec![0u32; window_days];
    let mut future_dropped = 0usize;

    for mention in sparse {
        let age = today.days_since(mention.date);
        if age < 0 {
            future_dropped += 1;
            continue;
        }
        let age = age as u64;
        if age >= window_days as u64 {
            continue;
        }
        let index = window_days - 1 - age as usize;
        counts[index] = counts[index].saturating_add(mention.count);
    }

    if future_dropped > 0 {
        tracing::trace!(
            future_dropped,
            today = %today,
            "dropped future-dated mentions"
        );
    }

    FilledTimeline::from_counts(today, counts)
}
