use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single stream record (e.g. `stream-42`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(String);

impl StreamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StreamId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StreamId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One logged playback event.
///
/// Records are created once by the generator and only ever read afterwards;
/// the record store hands them out behind shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamRecord {
    pub id: StreamId,
    pub song_name: String,
    pub artist: String,
    pub streamed_at: DateTime<Utc>,
    pub stream_count: u64,
    pub user_id: String,
}

impl StreamRecord {
    pub fn new(
        id: impl Into<StreamId>,
        song_name: impl Into<String>,
        artist: impl Into<String>,
        streamed_at: DateTime<Utc>,
        stream_count: u64,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            song_name: song_name.into(),
            artist: artist.into(),
            streamed_at,
            stream_count,
            user_id: user_id.into(),
        }
    }
}
