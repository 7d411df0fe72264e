use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading signal.
///
/// Indicator classifiers only produce `Buy`, `Sell` and `Neutral`; the
/// strong variants come from the five-way recommendation scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    StrongSell,
    Sell,
    Neutral,
    Buy,
    StrongBuy,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::StrongSell => "STRONG_SELL",
            Signal::Sell => "SELL",
            Signal::Neutral => "NEUTRAL",
            Signal::Buy => "BUY",
            Signal::StrongBuy => "STRONG_BUY",
        }
    }

    /// Collapse the five-way label onto buy/sell/neutral.
    pub fn direction(&self) -> Signal {
        match self {
            Signal::StrongBuy | Signal::Buy => Signal::Buy,
            Signal::StrongSell | Signal::Sell => Signal::Sell,
            Signal::Neutral => Signal::Neutral,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occurrences of each direction across a set of classified indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    pub buy: usize,
    pub sell: usize,
    pub neutral: usize,
}

impl SignalCounts {
    pub fn record(&mut self, signal: Signal) {
        match signal.direction() {
            Signal::Buy => self.buy += 1,
            Signal::Sell => self.sell += 1,
            _ => self.neutral += 1,
        }
    }

    pub fn merge(&self, other: &SignalCounts) -> SignalCounts {
        SignalCounts {
            buy: self.buy + other.buy,
            sell: self.sell + other.sell,
            neutral: self.neutral + other.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.buy + self.sell + self.neutral
    }
}
