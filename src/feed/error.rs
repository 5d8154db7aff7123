// src/feed/error.rs
use thiserror::Error;

/// Failures that abort a whole fetch-and-normalize pass.
///
/// Per-row problems (blank title, unknown month, junk coordinates) never show
/// up here; they degrade a single field or drop a single row instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("data source answered HTTP {status}")]
    Status { status: u16 },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("payload has {rows} row(s); need a header row and at least one data row")]
    Shape { rows: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    Transport,
    Shape,
}

impl FeedErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedErrorKind::Transport => "transport",
            FeedErrorKind::Shape => "shape",
        }
    }
}

impl FeedError {
    pub fn kind(&self) -> FeedErrorKind {
        match self {
            FeedError::Transport(_) | FeedError::Status { .. } => FeedErrorKind::Transport,
            FeedError::Malformed(_) | FeedError::Shape { .. } => FeedErrorKind::Shape,
        }
    }

    /// Message shown to visitors. Transport and shape failures read differently
    /// so "could not reach the listing" is never confused with "the listing is empty".
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            FeedErrorKind::Transport => {
                "Could not load events: the data source is unreachable. Please try again later."
            }
            FeedErrorKind::Shape => {
                "Could not load events: the data source returned no usable rows."
            }
        }
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
