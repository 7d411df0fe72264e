//! RSI (Relative Strength Index) classifier

use crate::models::indicators::RsiReading;
use crate::models::signal::Signal;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Classify RSI(14) against its previous value.
///
/// BUY needs the previous reading above the current one while oversold,
/// SELL the previous reading below the current one while overbought.
pub fn classify_rsi(rsi: &RsiReading) -> Signal {
    if rsi.value < RSI_OVERSOLD && rsi.previous > rsi.value {
        Signal::Buy
    } else if rsi.value > RSI_OVERBOUGHT && rsi.previous < rsi.value {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
