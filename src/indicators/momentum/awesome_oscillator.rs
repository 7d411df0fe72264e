//! Awesome Oscillator classifier

use crate::models::indicators::AwesomeOscillatorReading;
use crate::models::signal::Signal;

/// Zero-line crossover, or growth on the same side of zero.
///
/// A previous reading of exactly zero counts as the far side of the line.
pub fn classify_awesome_oscillator(ao: &AwesomeOscillatorReading) -> Signal {
    let rising_cross = ao.value > 0.0 && ao.previous <= 0.0;
    let rising_above = ao.value > 0.0 && ao.previous > 0.0 && ao.value > ao.previous;
    let falling_cross = ao.value < 0.0 && ao.previous >= 0.0;
    let falling_below = ao.value < 0.0 && ao.previous < 0.0 && ao.value < ao.previous;

    if rising_cross || rising_above {
        Signal::Buy
    } else if falling_cross || falling_below {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
