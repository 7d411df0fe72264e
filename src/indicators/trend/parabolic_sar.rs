//! Parabolic SAR classifier

use crate::models::indicators::ParabolicSarReading;
use crate::models::signal::Signal;

pub fn classify_parabolic_sar(psar: &ParabolicSarReading) -> Signal {
    if psar.value < psar.open {
        Signal::Buy
    } else if psar.value > psar.open {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
