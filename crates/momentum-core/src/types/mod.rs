//! Value types flowing through the trend engine.

pub mod calendar_day;
pub mod mention;
pub mod subject;
pub mod timeline;
pub mod trend;

pub use calendar_day::CalendarDay;
pub use mention::{aggregate_mentions, Mention, MentionRecord};
pub use subject::{SubjectId, SubjectTrend};
pub use timeline::FilledTimeline;
pub use trend::{MomentumPhase, TrendResult};
