use std::fmt;

/// Result type for streamify-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while parsing control-state values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sort field name is not part of the stream record schema
    InvalidSortField(String),

    /// Sort direction is neither ascending nor descending
    InvalidSortDirection(String),

    /// Page size is zero or not one of the allowed options
    InvalidPageSize(usize),

    /// No page size options were provided
    EmptyPageSizeOptions,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSortField(field) => write!(f, "Unknown sort field: {}", field),
            Error::InvalidSortDirection(dir) => write!(f, "Unknown sort direction: {}", dir),
            Error::InvalidPageSize(size) => write!(f, "Page size not allowed: {}", size),
            Error::EmptyPageSizeOptions => write!(f, "At least one page size option is required"),
        }
    }
}

impl std::error::Error for Error {}
