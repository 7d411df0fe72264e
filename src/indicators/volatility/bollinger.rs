//! Bollinger Bands classifiers

use crate::models::indicators::BollingerReading;
use crate::models::signal::Signal;

/// Close below the lower band. Never sells.
pub fn classify_bollinger_lower(bb: &BollingerReading) -> Signal {
    if bb.close < bb.lower {
        Signal::Buy
    } else {
        Signal::Neutral
    }
}

/// Close above the upper band. Never buys.
pub fn classify_bollinger_upper(bb: &BollingerReading) -> Signal {
    if bb.close > bb.upper {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Combined view over both bands.
pub fn classify_bollinger(bb: &BollingerReading) -> Signal {
    match classify_bollinger_lower(bb) {
        Signal::Neutral => classify_bollinger_upper(bb),
        signal => signal,
    }
}
