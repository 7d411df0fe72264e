use std::time::Duration;
use thiserror::Error;

/// A recommendation score fell outside `[-1, 1]` (or was NaN).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("recommendation score {score} is outside [-1, 1]")]
pub struct DomainError {
    pub score: f64,
}

/// One of the three leading recommendation columns could not be mapped.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to compute recommendation for {column}")]
pub struct RecommendationError {
    pub column: &'static str,
    #[source]
    pub source: DomainError,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AggregationError {
    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    #[error("row has {actual} columns, at least {required} are required")]
    IncompleteRow { required: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("timeout on reading data from scanner API after {0:?}")]
    Timeout(Duration),

    #[error("scanner API returned {status}")]
    Status {
        status: reqwest::StatusCode,
        body: Vec<u8>,
    },

    #[error("failed to parse scanner response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid scanner URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("exchange or symbol not found: {0}")]
    EmptyResponse(String),

    #[error(transparent)]
    Recommendation(#[from] RecommendationError),

    #[error(transparent)]
    Aggregation(#[from] AggregationError),
}

pub type Result<T> = std::result::Result<T, ScannerError>;
