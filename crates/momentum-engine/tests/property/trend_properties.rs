use momentum_core::config::DecayConfig;
use momentum_core::types::{CalendarDay, Mention, MomentumPhase, SubjectId, TrendResult};
use momentum_engine::{build_timeline, calculate_velocity, classify, decay_weight, rank, trend_score};
use proptest::prelude::*;

fn arb_mentions() -> impl Strategy<Value = Vec<Mention>> {
    prop::collection::vec((-40i32..10, 1u32..50), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(offset, count)| Mention::new(CalendarDay::from_days_since_epoch(offset), count))
            .collect()
    })
}

fn arb_phase() -> impl Strategy<Value = MomentumPhase> {
    prop_oneof![
        Just(MomentumPhase::Hot),
        Just(MomentumPhase::Rising),
        Just(MomentumPhase::Stable),
        Just(MomentumPhase::Cooling),
        Just(MomentumPhase::Dormant),
    ]
}

// ── Decay weight ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn weight_is_one_at_age_zero(half_life in 0.01f64..1000.0) {
        prop_assert_eq!(decay_weight(0.0, half_life), 1.0);
    }

    #[test]
    fn weight_halves_at_half_life(half_life in 0.01f64..1000.0) {
        let w = decay_weight(half_life, half_life);
        prop_assert!((w - 0.5).abs() < 1e-12, "w = {}", w);
    }

    #[test]
    fn weight_strictly_decreasing(
        half_life in 0.5f64..100.0,
        age in 0.0f64..200.0,
        step in 0.01f64..10.0,
    ) {
        prop_assert!(decay_weight(age + step, half_life) < decay_weight(age, half_life));
    }

    #[test]
    fn future_weight_is_zero(half_life in 0.01f64..1000.0, age in -1000.0f64..-0.001) {
        prop_assert_eq!(decay_weight(age, half_life), 0.0);
    }
}

// ── Timeline builder ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn timeline_length_is_window(mentions in arb_mentions(), window in 0usize..60) {
        let timeline = build_timeline(&mentions, window, CalendarDay::EPOCH);
        prop_assert_eq!(timeline.len(), window);
    }

    #[test]
    fn timeline_never_invents_mentions(mentions in arb_mentions(), window in 0usize..60) {
        let timeline = build_timeline(&mentions, window, CalendarDay::EPOCH);
        let input_total: u64 = mentions.iter().map(|m| u64::from(m.count)).sum();
        prop_assert!(timeline.total() <= input_total);
    }
}

// ── Score and velocity ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_non_negative_and_finite(mentions in arb_mentions()) {
        let score = trend_score(&mentions, CalendarDay::EPOCH, &DecayConfig::default());
        prop_assert!(score >= 0.0 && score.is_finite());
    }

    #[test]
    fn velocity_is_emerging_when_previous_window_is_silent(
        recent in prop::collection::vec(0u32..20, 3),
        prefix in prop::collection::vec(0u32..20, 0..10),
    ) {
        prop_assume!(recent.iter().any(|&c| c > 0));
        let mut counts = prefix;
        counts.extend_from_slice(&[0, 0, 0, 0]);
        counts.extend_from_slice(&recent);
        prop_assert_eq!(calculate_velocity(&counts, 3.0), 100);
    }

    #[test]
    fn velocity_is_bounded_below_by_minus_one_hundred(
        counts in prop::collection::vec(0u32..50, 7..20),
        half_life in 0.5f64..30.0,
    ) {
        prop_assert!(calculate_velocity(&counts, half_life) >= -100);
    }
}

// ── Classifier ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn hot_and_rising_inputs_classify_hot(
        score in 5.0f64..1000.0,
        velocity in 50i64..10_000,
        days in 0u32..=3,
    ) {
        let config = DecayConfig::default();
        prop_assert_eq!(classify(score, velocity, Some(days), &config), MomentumPhase::Hot);
    }

    #[test]
    fn no_history_is_always_dormant(score in 0.0f64..1000.0, velocity in -1000i64..1000) {
        let config = DecayConfig::default();
        prop_assert_eq!(classify(score, velocity, None, &config), MomentumPhase::Dormant);
    }
}

// ── Uniform weighting ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn uniform_weighting_tracks_raw_percentage_change(
        counts in prop::collection::vec(0u32..30, 7),
    ) {
        let previous: u32 = counts[..4].iter().sum();
        let recent: u32 = counts[4..].iter().sum();
        prop_assume!(previous > 0);
        let raw = ((f64::from(recent) - f64::from(previous)) / f64::from(previous) * 100.0).round() as i64;
        let half_life = DecayConfig::uniform_weighting().half_life_days();
        let weighted = calculate_velocity(&counts, half_life);
        prop_assert!((weighted - raw).abs() <= 1, "weighted {} vs raw {}", weighted, raw);
    }
}

// ── Ranker ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rank_is_sorted_and_stable(
        rows in prop::collection::vec(
            (0u8..4, prop::option::of(0u32..4), arb_phase()),
            0..60,
        ),
    ) {
        // Few distinct keys so ties are common.
        let results: Vec<(SubjectId, TrendResult)> = rows
            .iter()
            .enumerate()
            .map(|(i, (score, days, phase))| {
                (
                    SubjectId::new(format!("s{i:03}")),
                    TrendResult {
                        trend_score: f64::from(*score) * 1.5,
                        velocity: 0,
                        phase: *phase,
                        days_since_last_mention: *days,
                    },
                )
            })
            .collect();

        let ranked = rank(&results);
        prop_assert_eq!(ranked.len(), results.len());

        let position = |id: &SubjectId| results.iter().position(|(s, _)| s == id).unwrap();
        for pair in ranked.windows(2) {
            let (ia, ib) = (position(&pair[0]), position(&pair[1]));
            let (a, b) = (&results[ia].1, &results[ib].1);
            prop_assert!(a.trend_score >= b.trend_score);
            if a.trend_score == b.trend_score {
                let key = |r: &TrendResult| r.days_since_last_mention.map_or(u64::MAX, u64::from);
                prop_assert!(key(a) <= key(b));
                if key(a) == key(b) {
                    prop_assert!(ia < ib, "tie reordered: {} before {}", ia, ib);
                }
            }
        }
    }
}
