//! MentionSource trait: the data-access collaborator the engine reads from.
//!
//! Persistence and ingestion live outside this workspace. Implementors hand
//! back per-day aggregated mentions for a bounded window plus the subject's
//! most recent mention date, which may predate the window.

use std::collections::HashMap;

use crate::errors::SourceError;
use crate::types::{aggregate_mentions, CalendarDay, Mention, SubjectId};

/// Supplies mention history per subject.
pub trait MentionSource: Send + Sync {
    /// Mentions dated within `[from, to]`, inclusive, at most one per day.
    fn mentions_between(
        &self,
        subject: &SubjectId,
        from: CalendarDay,
        to: CalendarDay,
    ) -> Result<Vec<Mention>, SourceError>;

    /// Date of the most recent mention, or `None` if the subject has no history.
    fn last_mention(&self, subject: &SubjectId) -> Result<Option<CalendarDay>, SourceError>;
}

/// In-memory mention source for tests and single-process usage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMentionSource {
    mentions: HashMap<SubjectId, Vec<Mention>>,
}

impl InMemoryMentionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record mentions for a subject. Same-day entries are summed.
    pub fn record(&mut self, subject: impl Into<SubjectId>, mentions: &[Mention]) {
        let entry = self.mentions.entry(subject.into()).or_default();
        entry.extend_from_slice(mentions);
        let merged = aggregate_mentions(entry);
        *entry = merged;
    }

    /// Sum of every mention ever recorded for the subject.
    pub fn lifetime_total(&self, subject: &SubjectId) -> u64 {
        self.mentions
            .get(subject)
            .map(|ms| ms.iter().map(|m| u64::from(m.count)).sum())
            .unwrap_or(0)
    }
}

impl MentionSource for InMemoryMentionSource {
    fn mentions_between(
        &self,
        subject: &SubjectId,
        from: CalendarDay,
        to: CalendarDay,
    ) -> Result<Vec<Mention>, SourceError> {
        Ok(self
            .mentions
            .get(subject)
            .map(|ms| {
                ms.iter()
                    .filter(|m| m.date >= from && m.date <= to)
                    .copied()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn last_mention(&self, subject: &SubjectId) -> Result<Option<CalendarDay>, SourceError> {
        Ok(self
            .mentions
            .get(subject)
            .and_then(|ms| ms.iter().map(|m| m.date).max()))
    }
}
