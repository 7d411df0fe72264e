//! Indicator registry: the tagged decision table behind every column rule

use crate::indicators::{momentum, rating, trend, volatility};
use crate::models::indicators::*;
use crate::models::signal::Signal;

/// Which tally a classification counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Oscillator,
    MovingAverage,
}

/// Classification rule for a run of consecutive row cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    MovingAverage,
    Rsi,
    Stochastic,
    Cci,
    Adx,
    AwesomeOscillator,
    Momentum,
    Macd,
    BollingerLower,
    BollingerUpper,
    ParabolicSar,
    Rating,
}

impl IndicatorKind {
    /// Number of consecutive cells the rule consumes.
    pub fn arity(self) -> usize {
        match self {
            IndicatorKind::Rating => 1,
            IndicatorKind::Stochastic => 4,
            IndicatorKind::Adx => 5,
            _ => 2,
        }
    }

    /// Build a reading from `cells`, laid out in scanner column order.
    /// Returns `None` when fewer than `arity()` cells are supplied.
    pub fn read(self, cells: &[f64]) -> Option<IndicatorReading> {
        let cells = cells.get(..self.arity())?;
        let reading = match self {
            IndicatorKind::MovingAverage => IndicatorReading::MovingAverage(MovingAverageReading {
                value: cells[0],
                close: cells[1],
            }),
            IndicatorKind::Rsi => IndicatorReading::Rsi(RsiReading {
                value: cells[0],
                previous: cells[1],
            }),
            IndicatorKind::Stochastic => IndicatorReading::Stochastic(StochasticReading {
                k: cells[0],
                d: cells[1],
                previous_k: cells[2],
                previous_d: cells[3],
            }),
            IndicatorKind::Cci => IndicatorReading::Cci(CciReading {
                value: cells[0],
                previous: cells[1],
            }),
            IndicatorKind::Adx => IndicatorReading::Adx(AdxReading {
                value: cells[0],
                plus_di: cells[1],
                minus_di: cells[2],
                previous_plus_di: cells[3],
                previous_minus_di: cells[4],
            }),
            IndicatorKind::AwesomeOscillator => {
                IndicatorReading::AwesomeOscillator(AwesomeOscillatorReading {
                    value: cells[0],
                    previous: cells[1],
                })
            }
            IndicatorKind::Momentum => IndicatorReading::Momentum(MomentumReading {
                value: cells[0],
                previous: cells[1],
            }),
            IndicatorKind::Macd => IndicatorReading::Macd(MacdReading {
                macd: cells[0],
                signal: cells[1],
            }),
            // Band readers take (close, band).
            IndicatorKind::BollingerLower => IndicatorReading::BollingerLower(BollingerReading {
                close: cells[0],
                lower: cells[1],
                upper: f64::NAN,
            }),
            IndicatorKind::BollingerUpper => IndicatorReading::BollingerUpper(BollingerReading {
                close: cells[0],
                lower: f64::NAN,
                upper: cells[1],
            }),
            IndicatorKind::ParabolicSar => IndicatorReading::ParabolicSar(ParabolicSarReading {
                value: cells[0],
                open: cells[1],
            }),
            IndicatorKind::Rating => IndicatorReading::Rating(RatingReading { value: cells[0] }),
        };
        Some(reading)
    }

    /// Build a reading from positional row cells. Returns `None` when any
    /// of the rule's own cells is absent or `null`.
    pub fn read_row(self, cells: &[Option<f64>]) -> Option<IndicatorReading> {
        let values: Vec<f64> = cells
            .get(..self.arity())?
            .iter()
            .copied()
            .collect::<Option<_>>()?;
        self.read(&values)
    }
}

/// Tagged reading, one variant per classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorReading {
    MovingAverage(MovingAverageReading),
    Rsi(RsiReading),
    Stochastic(StochasticReading),
    Cci(CciReading),
    Adx(AdxReading),
    AwesomeOscillator(AwesomeOscillatorReading),
    Momentum(MomentumReading),
    Macd(MacdReading),
    BollingerLower(BollingerReading),
    BollingerUpper(BollingerReading),
    ParabolicSar(ParabolicSarReading),
    Rating(RatingReading),
}

impl IndicatorReading {
    pub fn kind(&self) -> IndicatorKind {
        match self {
            IndicatorReading::MovingAverage(_) => IndicatorKind::MovingAverage,
            IndicatorReading::Rsi(_) => IndicatorKind::Rsi,
            IndicatorReading::Stochastic(_) => IndicatorKind::Stochastic,
            IndicatorReading::Cci(_) => IndicatorKind::Cci,
            IndicatorReading::Adx(_) => IndicatorKind::Adx,
            IndicatorReading::AwesomeOscillator(_) => IndicatorKind::AwesomeOscillator,
            IndicatorReading::Momentum(_) => IndicatorKind::Momentum,
            IndicatorReading::Macd(_) => IndicatorKind::Macd,
            IndicatorReading::BollingerLower(_) => IndicatorKind::BollingerLower,
            IndicatorReading::BollingerUpper(_) => IndicatorKind::BollingerUpper,
            IndicatorReading::ParabolicSar(_) => IndicatorKind::ParabolicSar,
            IndicatorReading::Rating(_) => IndicatorKind::Rating,
        }
    }

    pub fn classify(&self) -> Signal {
        match self {
            IndicatorReading::MovingAverage(r) => trend::classify_moving_average(r),
            IndicatorReading::Rsi(r) => momentum::classify_rsi(r),
            IndicatorReading::Stochastic(r) => momentum::classify_stochastic(r),
            IndicatorReading::Cci(r) => momentum::classify_cci(r),
            IndicatorReading::Adx(r) => trend::classify_adx(r),
            IndicatorReading::AwesomeOscillator(r) => momentum::classify_awesome_oscillator(r),
            IndicatorReading::Momentum(r) => momentum::classify_momentum(r),
            IndicatorReading::Macd(r) => momentum::classify_macd(r),
            IndicatorReading::BollingerLower(r) => volatility::classify_bollinger_lower(r),
            IndicatorReading::BollingerUpper(r) => volatility::classify_bollinger_upper(r),
            IndicatorReading::ParabolicSar(r) => trend::classify_parabolic_sar(r),
            IndicatorReading::Rating(r) => rating::classify_rating(r),
        }
    }
}
