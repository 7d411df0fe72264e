//! Pre-rated columns (Ichimoku, VWMA, HullMA, Stoch.RSI, W%R, BBPower, UO)

use crate::models::indicators::RatingReading;
use crate::models::signal::Signal;

/// 1 is a buy, -1 a sell, every other value neutral.
pub fn classify_rating(rating: &RatingReading) -> Signal {
    if rating.value == 1.0 {
        Signal::Buy
    } else if rating.value == -1.0 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
