//! Moving average vs close classifier (EMA/SMA at every period)

use crate::models::indicators::MovingAverageReading;
use crate::models::signal::Signal;

/// Price trading above the average is bullish, below it bearish.
pub fn classify_moving_average(ma: &MovingAverageReading) -> Signal {
    if ma.value < ma.close {
        Signal::Buy
    } else if ma.value > ma.close {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
