//! Stable ranking: score descending, then fewest days since last mention.

use std::cmp::Ordering;

use momentum_core::types::{SubjectId, SubjectTrend, TrendResult};

/// Order subjects by trend. Ties on both keys keep their input order.
pub fn rank(results: &[(SubjectId, TrendResult)]) -> Vec<SubjectId> {
    let mut ordered: Vec<&(SubjectId, TrendResult)> = results.iter().collect();
    // `sort_by` is stable.
    ordered.sort_by(|a, b| compare(&a.1, &b.1));
    ordered.into_iter().map(|(id, _)| id.clone()).collect()
}

/// In-place variant of [`rank`] for full subject trends.
pub fn rank_trends(trends: &mut [SubjectTrend]) {
    trends.sort_by(|a, b| compare(&a.result, &b.result));
}

/// Ranking comparator. Subjects with no history sort after any known
/// last mention on equal scores.
pub fn compare(a: &TrendResult, b: &TrendResult) -> Ordering {
    b.trend_score
        .total_cmp(&a.trend_score)
        .then_with(|| silence_key(a).cmp(&silence_key(b)))
}

fn silence_key(result: &TrendResult) -> u64 {
    result
        .days_since_last_mention
        .map_or(u64::MAX, u64::from)
}
