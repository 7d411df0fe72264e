use serde::{Deserialize, Serialize};

/// Moving average compared against the latest close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageReading {
    pub value: f64,
    pub close: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiReading {
    pub value: f64,
    pub previous: f64,
}

/// Stochastic %K/%D lines for the current and previous bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticReading {
    pub k: f64,
    pub d: f64,
    pub previous_k: f64,
    pub previous_d: f64,
}

/// CCI(20), current and previous bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CciReading {
    pub value: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdxReading {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub previous_plus_di: f64,
    pub previous_minus_di: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AwesomeOscillatorReading {
    pub value: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentumReading {
    pub value: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdReading {
    pub macd: f64,
    pub signal: f64,
}

/// Close price against both Bollinger bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerReading {
    pub close: f64,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParabolicSarReading {
    pub value: f64,
    pub open: f64,
}

/// Pre-computed rating column where the scanner already encodes the
/// direction as 1 (buy), -1 (sell) or anything else (neutral).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingReading {
    pub value: f64,
}
