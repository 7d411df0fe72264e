//! Recommendation score mapping

use crate::error::DomainError;
use crate::indicators::rating::classify_rating;
use crate::models::indicators::RatingReading;
use crate::models::signal::Signal;

/// Map a recommendation score in `[-1, 1]` onto the five-way scale.
///
/// | score        | signal      |
/// |--------------|-------------|
/// | `[-1, -0.5)` | STRONG_SELL |
/// | `[-0.5, 0)`  | SELL        |
/// | `0`          | NEUTRAL     |
/// | `(0, 0.5]`   | BUY         |
/// | `(0.5, 1]`   | STRONG_BUY  |
///
/// Anything else, NaN included, is a `DomainError`.
pub fn map_recommendation(score: f64) -> Result<Signal, DomainError> {
    if score >= -1.0 && score < -0.5 {
        Ok(Signal::StrongSell)
    } else if score >= -0.5 && score < 0.0 {
        Ok(Signal::Sell)
    } else if score == 0.0 {
        Ok(Signal::Neutral)
    } else if score > 0.0 && score <= 0.5 {
        Ok(Signal::Buy)
    } else if score > 0.5 && score <= 1.0 {
        Ok(Signal::StrongBuy)
    } else {
        Err(DomainError { score })
    }
}

/// Three-way label for binary-style rating columns.
pub fn map_rating(value: f64) -> Signal {
    classify_rating(&RatingReading { value })
}
