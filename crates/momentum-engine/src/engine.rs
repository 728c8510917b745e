//! TrendEngine: orchestrates timeline → score → velocity → phase, and the
//! batch / top-K queries over a [`MentionSource`].

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, Span};

use momentum_core::config::defaults::{DEFAULT_TOP_K, DEFAULT_WINDOW_DAYS};
use momentum_core::config::{DecayConfig, MomentumConfig};
use momentum_core::errors::{ConfigError, EngineError, SourceError};
use momentum_core::tracing::spans;
use momentum_core::traits::MentionSource;
use momentum_core::types::{
    CalendarDay, FilledTimeline, Mention, MomentumPhase, SubjectId, SubjectTrend, TrendResult,
};

use crate::decay::trend_score;
use crate::phase::classify;
use crate::ranking::rank_trends;
use crate::timeline::build_timeline;
use crate::velocity::velocity_breakdown;

/// Every intermediate value behind a [`TrendResult`], for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendBreakdown {
    pub trend_score: f64,
    pub recent_score: f64,
    pub previous_score: f64,
    pub velocity: i64,
    pub phase: MomentumPhase,
    pub days_since_last_mention: Option<u32>,
}

impl TrendBreakdown {
    pub fn result(&self) -> TrendResult {
        TrendResult {
            trend_score: self.trend_score,
            velocity: self.velocity,
            phase: self.phase,
            days_since_last_mention: self.days_since_last_mention,
        }
    }
}

/// Compute a subject's trend from its sparse history as of `now`.
///
/// Days since the last mention come from the latest mention dated on or
/// before `now`; a history with only future-dated mentions counts as none.
pub fn compute_trend(sparse: &[Mention], now: CalendarDay, config: &DecayConfig) -> TrendResult {
    evaluate(sparse, now, None, config, DEFAULT_WINDOW_DAYS).0.result()
}

/// Trend engine bound to one decay configuration, window size, and
/// default top-K size.
#[derive(Debug, Clone)]
pub struct TrendEngine {
    config: DecayConfig,
    window_days: usize,
    top_k: usize,
}

impl TrendEngine {
    /// Create an engine with the default 14-day window and top-20 listings.
    pub fn new(config: DecayConfig) -> Self {
        Self {
            config,
            window_days: DEFAULT_WINDOW_DAYS,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Use a different dense window size.
    pub fn with_window(mut self, window_days: usize) -> Self {
        self.window_days = window_days;
        self
    }

    /// Use a different default size for [`Self::top_k_default`].
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Build from a resolved [`MomentumConfig`].
    pub fn from_config(config: &MomentumConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.decay_config()?)
            .with_window(config.timeline.effective_window_days())
            .with_top_k(config.ranking.effective_top_k()))
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    pub fn window_days(&self) -> usize {
        self.window_days
    }

    pub fn default_top_k(&self) -> usize {
        self.top_k
    }

    /// Dense timeline of `sparse` ending at `now`.
    pub fn timeline(&self, sparse: &[Mention], now: CalendarDay) -> FilledTimeline {
        build_timeline(sparse, self.window_days, now)
    }

    pub fn compute(&self, sparse: &[Mention], now: CalendarDay) -> TrendResult {
        self.breakdown(sparse, now).result()
    }

    /// Like [`Self::compute`], but also trusts an externally tracked last
    /// mention date, which may lie outside `sparse`. A date after `now` is
    /// ignored as clock skew.
    pub fn compute_with_last_mention(
        &self,
        sparse: &[Mention],
        now: CalendarDay,
        last_mention: Option<CalendarDay>,
    ) -> TrendResult {
        evaluate(sparse, now, last_mention, &self.config, self.window_days)
            .0
            .result()
    }

    pub fn breakdown(&self, sparse: &[Mention], now: CalendarDay) -> TrendBreakdown {
        evaluate(sparse, now, None, &self.config, self.window_days).0
    }

    /// Trend plus dense timeline for one subject.
    pub fn report(
        &self,
        subject: impl Into<SubjectId>,
        sparse: &[Mention],
        now: CalendarDay,
    ) -> SubjectTrend {
        let (breakdown, timeline) = evaluate(sparse, now, None, &self.config, self.window_days);
        SubjectTrend {
            subject: subject.into(),
            result: breakdown.result(),
            timeline,
        }
    }

    /// Score every subject against `source`, in parallel. Output order
    /// matches `subjects`. On failure, the error of the earliest failing
    /// subject in `subjects` is returned.
    pub fn score_subjects<S>(
        &self,
        source: &S,
        subjects: &[SubjectId],
        now: CalendarDay,
    ) -> Result<Vec<SubjectTrend>, EngineError>
    where
        S: MentionSource + ?Sized,
    {
        let span = tracing::info_span!(spans::BATCH_SPAN, subject_count = subjects.len());
        let _guard = span.enter();
        let started = Instant::now();

        let lookback = i32::try_from(self.window_days.saturating_sub(1)).unwrap_or(i32::MAX);
        let from = now.add_days(-lookback);

        // Collect every outcome first so the reported error follows input
        // order rather than worker scheduling.
        let outcomes: Vec<Result<SubjectTrend, EngineError>> = subjects
            .par_iter()
            .map(|subject| self.score_subject(source, subject, from, now, &span))
            .collect();
        let trends = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;

        info!(
            subjects = trends.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch scoring complete"
        );
        Ok(trends)
    }

    /// Score, rank, and keep the `k` strongest subjects.
    pub fn top_k<S>(
        &self,
        source: &S,
        subjects: &[SubjectId],
        now: CalendarDay,
        k: usize,
    ) -> Result<Vec<SubjectTrend>, EngineError>
    where
        S: MentionSource + ?Sized,
    {
        let span = tracing::info_span!(spans::TOP_K_SPAN, k);
        let _guard = span.enter();

        let mut trends = self.score_subjects(source, subjects, now)?;
        rank_trends(&mut trends);
        trends.truncate(k);
        debug!(returned = trends.len(), "top-k ranked");
        Ok(trends)
    }

    /// [`Self::top_k`] with the engine's configured size (`[ranking] top_k`).
    pub fn top_k_default<S>(
        &self,
        source: &S,
        subjects: &[SubjectId],
        now: CalendarDay,
    ) -> Result<Vec<SubjectTrend>, EngineError>
    where
        S: MentionSource + ?Sized,
    {
        self.top_k(source, subjects, now, self.top_k)
    }

    fn score_subject<S>(
        &self,
        source: &S,
        subject: &SubjectId,
        from: CalendarDay,
        now: CalendarDay,
        batch: &Span,
    ) -> Result<SubjectTrend, EngineError>
    where
        S: MentionSource + ?Sized,
    {
        // Runs on a rayon worker, so the batch span is not the thread's
        // current span and must be named as parent.
        let span = tracing::debug_span!(parent: batch, spans::SUBJECT_SPAN, subject = %subject);
        let _guard = span.enter();

        let mentions = source
            .mentions_between(subject, from, now)
            .map_err(|e| source_error(subject, e))?;
        let last_mention = source
            .last_mention(subject)
            .map_err(|e| source_error(subject, e))?;

        let (breakdown, timeline) =
            evaluate(&mentions, now, last_mention, &self.config, self.window_days);
        debug!(
            trend_score = breakdown.trend_score,
            velocity = breakdown.velocity,
            phase = %breakdown.phase,
            "subject scored"
        );

        Ok(SubjectTrend {
            subject: subject.clone(),
            result: breakdown.result(),
            timeline,
        })
    }
}

fn source_error(subject: &SubjectId, source: SourceError) -> EngineError {
    EngineError::Source {
        subject: subject.to_string(),
        source,
    }
}

fn evaluate(
    sparse: &[Mention],
    now: CalendarDay,
    external_last_mention: Option<CalendarDay>,
    config: &DecayConfig,
    window_days: usize,
) -> (TrendBreakdown, FilledTimeline) {
    let timeline = build_timeline(sparse, window_days, now);
    let score = trend_score(sparse, now, config);
    let velocity = velocity_breakdown(timeline.counts(), config.half_life_days());

    let latest_past = sparse
        .iter()
        .map(|m| m.date)
        .chain(external_last_mention)
        .filter(|d| *d <= now)
        .max();
    let days_since_last_mention =
        latest_past.map(|d| u32::try_from(now.days_since(d)).unwrap_or(u32::MAX));

    let phase = classify(score, velocity.velocity, days_since_last_mention, config);

    let breakdown = TrendBreakdown {
        trend_score: score,
        recent_score: velocity.recent_score,
        previous_score: velocity.previous_score,
        velocity: velocity.velocity,
        phase,
        days_since_last_mention,
    };
    (breakdown, timeline)
}
