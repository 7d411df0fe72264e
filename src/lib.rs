//! Client for a technical-analysis scanner API.
//!
//! Fetches indicator columns for a symbol, classifies each indicator into
//! buy/sell/neutral with fixed threshold rules and tallies the result into a
//! [`RecommendSummary`](models::RecommendSummary).

pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{AggregationError, DomainError, RecommendationError, ScannerError};
pub use models::{Interval, Recommend, RecommendSummary, Signal};
pub use services::{Scanner, ScannerClient, Transport};
pub use signals::{map_rating, map_recommendation, Aggregator};
