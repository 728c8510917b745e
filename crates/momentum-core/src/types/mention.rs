use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CalendarDay;
use crate::errors::ValidationError;

/// `count` references to a subject on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub date: CalendarDay,
    pub count: u32,
}

impl Mention {
    pub fn new(date: CalendarDay, count: u32) -> Self {
        Self { date, count }
    }
}

/// A mention as delivered by an upstream feed, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRecord {
    pub date: String,
    pub count: i64,
}

impl TryFrom<MentionRecord> for Mention {
    type Error = ValidationError;

    fn try_from(record: MentionRecord) -> Result<Self, Self::Error> {
        let date: CalendarDay = record.date.parse()?;
        let count = u32::try_from(record.count)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| ValidationError::InvalidCount {
                date: record.date.clone(),
                count: record.count,
            })?;
        Ok(Self { date, count })
    }
}

/// Sum same-day mentions. Output is ordered by date, oldest first.
pub fn aggregate_mentions(mentions: &[Mention]) -> Vec<Mention> {
    let mut by_day: BTreeMap<CalendarDay, u32> = BTreeMap::new();
    for m in mentions {
        let slot = by_day.entry(m.date).or_insert(0);
        *slot = slot.saturating_add(m.count);
    }
    by_day
        .into_iter()
        .map(|(date, count)| Mention { date, count })
        .collect()
}
