//! Shared data models spanning the client layers.

pub mod indicators;
pub mod scan;
pub mod signal;
pub mod summary;

pub use indicators::{
    AdxReading, AwesomeOscillatorReading, BollingerReading, CciReading, MacdReading,
    MomentumReading, MovingAverageReading, ParabolicSarReading, RatingReading, RsiReading,
    StochasticReading,
};
pub use scan::{Interval, PivotMethod, PivotPoint, ScanRequest, ScanResponse, ScanRow};
pub use signal::{Signal, SignalCounts};
pub use summary::{AggregationWarning, ClassBreakdown, IndicatorSignal, Recommend, RecommendSummary};
