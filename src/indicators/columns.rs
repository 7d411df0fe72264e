//! Scanner column vocabulary and the positional layout of an analysis row.
//!
//! The order here is the protocol: the request lists columns in exactly
//! this order and the aggregator reads the response by offset.

use crate::indicators::registry::{IndicatorCategory, IndicatorKind};

pub const RECOMMEND_COLUMNS: [&str; 3] = ["Recommend.Other", "Recommend.All", "Recommend.MA"];

pub const OSCILLATOR_COLUMNS: [&str; 28] = [
    "RSI",
    "RSI[1]",
    "Stoch.K",
    "Stoch.D",
    "Stoch.K[1]",
    "Stoch.D[1]",
    "CCI20",
    "CCI20[1]",
    "ADX",
    "ADX+DI",
    "ADX-DI",
    "ADX+DI[1]",
    "ADX-DI[1]",
    "AO",
    "AO[1]",
    "Mom",
    "Mom[1]",
    "MACD.macd",
    "MACD.signal",
    "Rec.Stoch.RSI",
    "Stoch.RSI.K",
    "Rec.WR",
    "W.R",
    "Rec.BBPower",
    "BBPower",
    "Rec.UO",
    "UO",
    "close",
];

pub const MOVING_AVERAGE_COLUMNS: [&str; 12] = [
    "EMA10", "SMA10", "EMA20", "SMA20", "EMA30", "SMA30", "EMA50", "SMA50", "EMA100", "SMA100",
    "EMA200", "SMA200",
];

pub const MA_RATING_COLUMNS: [&str; 6] = [
    "Rec.Ichimoku",
    "Ichimoku.BLine",
    "Rec.VWMA",
    "VWMA",
    "Rec.HullMA9",
    "HullMA9",
];

pub const ICHIMOKU_COLUMNS: [&str; 2] = ["Rec.Ichimoku", "Ichimoku.BLine"];

pub const PIVOT_COLUMNS: [&str; 31] = [
    "Pivot.M.Classic.S3",
    "Pivot.M.Classic.S2",
    "Pivot.M.Classic.S1",
    "Pivot.M.Classic.Middle",
    "Pivot.M.Classic.R1",
    "Pivot.M.Classic.R2",
    "Pivot.M.Classic.R3",
    "Pivot.M.Fibonacci.S3",
    "Pivot.M.Fibonacci.S2",
    "Pivot.M.Fibonacci.S1",
    "Pivot.M.Fibonacci.Middle",
    "Pivot.M.Fibonacci.R1",
    "Pivot.M.Fibonacci.R2",
    "Pivot.M.Fibonacci.R3",
    "Pivot.M.Camarilla.S3",
    "Pivot.M.Camarilla.S2",
    "Pivot.M.Camarilla.S1",
    "Pivot.M.Camarilla.Middle",
    "Pivot.M.Camarilla.R1",
    "Pivot.M.Camarilla.R2",
    "Pivot.M.Camarilla.R3",
    "Pivot.M.Woodie.S3",
    "Pivot.M.Woodie.S2",
    "Pivot.M.Woodie.S1",
    "Pivot.M.Woodie.Middle",
    "Pivot.M.Woodie.R1",
    "Pivot.M.Woodie.R2",
    "Pivot.M.Woodie.R3",
    "Pivot.M.Demark.S1",
    "Pivot.M.Demark.Middle",
    "Pivot.M.Demark.R1",
];

pub const OSCILLATORS_RECOMMEND_INDEX: usize = 0;
pub const SUMMARY_RECOMMEND_INDEX: usize = 1;
pub const MOVING_AVERAGES_RECOMMEND_INDEX: usize = 2;

pub const OSCILLATORS_START: usize = RECOMMEND_COLUMNS.len();
pub const CLOSE_INDEX: usize = OSCILLATORS_START + OSCILLATOR_COLUMNS.len() - 1;
pub const MOVING_AVERAGES_START: usize = CLOSE_INDEX + 1;
pub const MOVING_AVERAGES_END: usize = MOVING_AVERAGES_START + MOVING_AVERAGE_COLUMNS.len();
pub const ANALYSIS_ROW_LEN: usize = MOVING_AVERAGES_END + MA_RATING_COLUMNS.len();

/// One classification step: which rule runs on the cells starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRule {
    pub name: &'static str,
    pub kind: IndicatorKind,
    pub category: IndicatorCategory,
    pub offset: usize,
}

impl ColumnRule {
    const fn oscillator(name: &'static str, kind: IndicatorKind, offset: usize) -> Self {
        Self {
            name,
            kind,
            category: IndicatorCategory::Oscillator,
            offset,
        }
    }

    const fn moving_average(name: &'static str, kind: IndicatorKind, offset: usize) -> Self {
        Self {
            name,
            kind,
            category: IndicatorCategory::MovingAverage,
            offset,
        }
    }
}

/// Oscillator-class rules. Rating rules point at the `Rec.*` column and
/// skip the raw value next to it.
pub const OSCILLATOR_RULES: [ColumnRule; 11] = [
    ColumnRule::oscillator("RSI", IndicatorKind::Rsi, 3),
    ColumnRule::oscillator("STOCH.K", IndicatorKind::Stochastic, 5),
    ColumnRule::oscillator("CCI", IndicatorKind::Cci, 9),
    ColumnRule::oscillator("ADX", IndicatorKind::Adx, 11),
    ColumnRule::oscillator("AO", IndicatorKind::AwesomeOscillator, 16),
    ColumnRule::oscillator("Mom", IndicatorKind::Momentum, 18),
    ColumnRule::oscillator("MACD", IndicatorKind::Macd, 20),
    ColumnRule::oscillator("Stoch.RSI", IndicatorKind::Rating, 22),
    ColumnRule::oscillator("W%R", IndicatorKind::Rating, 24),
    ColumnRule::oscillator("BBP", IndicatorKind::Rating, 26),
    ColumnRule::oscillator("UO", IndicatorKind::Rating, 28),
];

/// Rated moving-average indicators that follow the plain averages.
pub const MA_RATING_RULES: [ColumnRule; 3] = [
    ColumnRule::moving_average("Ichimoku", IndicatorKind::Rating, MOVING_AVERAGES_END),
    ColumnRule::moving_average("VWMA", IndicatorKind::Rating, MOVING_AVERAGES_END + 2),
    ColumnRule::moving_average("HullMA", IndicatorKind::Rating, MOVING_AVERAGES_END + 4),
];

/// Every column of a full analysis request, in row order.
pub fn analysis_columns() -> Vec<&'static str> {
    RECOMMEND_COLUMNS
        .iter()
        .chain(OSCILLATOR_COLUMNS.iter())
        .chain(MOVING_AVERAGE_COLUMNS.iter())
        .chain(MA_RATING_COLUMNS.iter())
        .copied()
        .collect()
}
