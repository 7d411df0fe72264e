//! ADX (Average Directional Index) classifier

use crate::models::indicators::AdxReading;
use crate::models::signal::Signal;

/// Minimum ADX for a directional-index crossover to count.
pub const ADX_TREND_STRENGTH: f64 = 20.0;

/// Classify a +DI/-DI crossover while the trend is strong enough.
pub fn classify_adx(adx: &AdxReading) -> Signal {
    if adx.value > ADX_TREND_STRENGTH
        && adx.previous_plus_di < adx.previous_minus_di
        && adx.plus_di > adx.minus_di
    {
        Signal::Buy
    } else if adx.value > ADX_TREND_STRENGTH
        && adx.previous_plus_di > adx.previous_minus_di
        && adx.plus_di < adx.minus_di
    {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
