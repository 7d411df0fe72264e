//! Stochastic %K/%D classifier

use crate::models::indicators::StochasticReading;
use crate::models::signal::Signal;

pub const STOCH_OVERSOLD: f64 = 20.0;
pub const STOCH_OVERBOUGHT: f64 = 80.0;

/// %K crossing %D inside the oversold (buy) or overbought (sell) zone.
pub fn classify_stochastic(stoch: &StochasticReading) -> Signal {
    if stoch.k < STOCH_OVERSOLD
        && stoch.d < STOCH_OVERSOLD
        && stoch.k > stoch.d
        && stoch.previous_k < stoch.previous_d
    {
        Signal::Buy
    } else if stoch.k > STOCH_OVERBOUGHT
        && stoch.d > STOCH_OVERBOUGHT
        && stoch.k < stoch.d
        && stoch.previous_k > stoch.previous_d
    {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
