use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Free-text query matched against song name and artist.
///
/// An empty query means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.0.push(c);
    }

    /// Remove the last character, returning false if the query was already empty
    pub fn pop(&mut self) -> bool {
        self.0.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SearchQuery {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Sortable columns of the stream table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    SongName,
    Artist,
    StreamedAt,
    StreamCount,
    UserId,
}

impl SortField {
    /// Columns in table order
    pub const ALL: [SortField; 5] = [
        SortField::SongName,
        SortField::Artist,
        SortField::StreamedAt,
        SortField::StreamCount,
        SortField::UserId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::SongName => "song_name",
            SortField::Artist => "artist",
            SortField::StreamedAt => "streamed_at",
            SortField::StreamCount => "stream_count",
            SortField::UserId => "user_id",
        }
    }

    /// Column header label
    pub fn label(&self) -> &'static str {
        match self {
            SortField::SongName => "Song Name",
            SortField::Artist => "Artist",
            SortField::StreamedAt => "Date Streamed",
            SortField::StreamCount => "Stream Count",
            SortField::UserId => "User ID",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "song_name" | "songName" | "song" => Ok(SortField::SongName),
            "artist" => Ok(SortField::Artist),
            "streamed_at" | "dateStreamed" | "date" | "timestamp" => Ok(SortField::StreamedAt),
            "stream_count" | "streamCount" | "count" | "play_count" => Ok(SortField::StreamCount),
            "user_id" | "userId" | "user" => Ok(SortField::UserId),
            other => Err(Error::InvalidSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(Error::InvalidSortDirection(other.to_string())),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortDirection::Descending)
    }
}

/// Requested page and page size.
///
/// `number` is what the caller asked for and may be out of range; the
/// composer clamps it before slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub number: i64,
    pub size: usize,
}

impl PageState {
    pub fn new(number: i64, size: usize) -> Self {
        Self { number, size }
    }

    pub fn first(size: usize) -> Self {
        Self::new(1, size)
    }
}

/// Page sizes the table offers, sorted ascending without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct PageSizeOptions(Vec<usize>);

impl PageSizeOptions {
    pub const DEFAULT: [usize; 3] = [10, 25, 50];

    pub fn new(mut sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::EmptyPageSizeOptions);
        }
        if sizes.contains(&0) {
            return Err(Error::InvalidPageSize(0));
        }
        sizes.sort_unstable();
        sizes.dedup();
        Ok(Self(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn contains(&self, size: usize) -> bool {
        self.0.contains(&size)
    }

    /// Smallest allowed size
    pub fn first(&self) -> usize {
        self.0[0]
    }

    /// Validate a requested size against the allowed set
    pub fn check(&self, size: usize) -> Result<usize> {
        if self.contains(size) {
            Ok(size)
        } else {
            Err(Error::InvalidPageSize(size))
        }
    }

    /// Next larger option, wrapping around to the smallest
    pub fn cycle_from(&self, size: usize) -> usize {
        self.0
            .iter()
            .copied()
            .find(|&s| s > size)
            .unwrap_or_else(|| self.first())
    }
}

impl Default for PageSizeOptions {
    fn default() -> Self {
        Self(Self::DEFAULT.to_vec())
    }
}

impl TryFrom<Vec<usize>> for PageSizeOptions {
    type Error = Error;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<PageSizeOptions> for Vec<usize> {
    fn from(options: PageSizeOptions) -> Self {
        options.0
    }
}
