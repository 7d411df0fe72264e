//! Momentum(10) classifier

use crate::models::indicators::MomentumReading;
use crate::models::signal::Signal;

pub fn classify_momentum(mom: &MomentumReading) -> Signal {
    if mom.value > mom.previous {
        Signal::Buy
    } else if mom.value < mom.previous {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
