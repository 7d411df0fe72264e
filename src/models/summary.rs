use serde::{Deserialize, Serialize};

use crate::models::signal::{Signal, SignalCounts};

/// The three five-way recommendations computed by the scanner itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommend {
    pub summary: Signal,
    pub oscillators: Signal,
    pub moving_averages: Signal,
}

/// Classification of a single indicator column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSignal {
    pub name: String,
    pub signal: Signal,
}

/// Per-class tally plus the individual classifications, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassBreakdown {
    pub counts: SignalCounts,
    pub computed: Vec<IndicatorSignal>,
}

impl ClassBreakdown {
    pub fn push(&mut self, name: &str, signal: Signal) {
        self.counts.record(signal);
        self.computed.push(IndicatorSignal {
            name: name.to_string(),
            signal,
        });
    }

    pub fn get(&self, name: &str) -> Option<Signal> {
        self.computed
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.signal)
    }
}

/// Non-fatal conditions met while aggregating a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregationWarning {
    /// The row ended before every requested moving average was present.
    ShortRow { expected: usize, counted: usize },
    /// An indicator was skipped because one of its cells was `null`.
    MissingValue { indicator: String },
}

/// Aggregated recommendation for one symbol/interval query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendSummary {
    pub recommend: Recommend,
    pub buy_count: usize,
    pub sell_count: usize,
    pub neutral_count: usize,
    pub oscillators: ClassBreakdown,
    pub moving_averages: ClassBreakdown,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<AggregationWarning>,
}

impl RecommendSummary {
    pub fn new(
        recommend: Recommend,
        oscillators: ClassBreakdown,
        moving_averages: ClassBreakdown,
        warnings: Vec<AggregationWarning>,
    ) -> Self {
        let totals = oscillators.counts.merge(&moving_averages.counts);
        Self {
            recommend,
            buy_count: totals.buy,
            sell_count: totals.sell,
            neutral_count: totals.neutral,
            oscillators,
            moving_averages,
            warnings,
        }
    }

    pub fn counts(&self) -> SignalCounts {
        SignalCounts {
            buy: self.buy_count,
            sell: self.sell_count,
            neutral: self.neutral_count,
        }
    }
}
