//! CCI(20) classifier

use crate::models::indicators::CciReading;
use crate::models::signal::Signal;

pub const CCI_LOWER: f64 = -100.0;
pub const CCI_UPPER: f64 = 100.0;

pub fn classify_cci(cci: &CciReading) -> Signal {
    if cci.value < CCI_LOWER && cci.value > cci.previous {
        Signal::Buy
    } else if cci.value > CCI_UPPER && cci.value < cci.previous {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
