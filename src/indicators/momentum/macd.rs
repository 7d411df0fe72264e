//! MACD (Moving Average Convergence Divergence) classifier

use crate::models::indicators::MacdReading;
use crate::models::signal::Signal;

/// MACD line above its signal line is bullish, below is bearish.
pub fn classify_macd(macd: &MacdReading) -> Signal {
    if macd.macd > macd.signal {
        Signal::Buy
    } else if macd.macd < macd.signal {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
