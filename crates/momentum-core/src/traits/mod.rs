pub mod mention_source;

pub use mention_source::{InMemoryMentionSource, MentionSource};
