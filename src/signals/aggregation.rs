//! Row aggregation: recommendation mapping plus per-class signal tallies

use tracing::{debug, warn};

use crate::error::{AggregationError, RecommendationError};
use crate::indicators::columns::{
    ColumnRule, CLOSE_INDEX, MA_RATING_RULES, MOVING_AVERAGES_END,
    MOVING_AVERAGES_RECOMMEND_INDEX, MOVING_AVERAGES_START, MOVING_AVERAGE_COLUMNS,
    OSCILLATORS_RECOMMEND_INDEX, OSCILLATOR_RULES, RECOMMEND_COLUMNS, SUMMARY_RECOMMEND_INDEX,
};
use crate::indicators::registry::IndicatorCategory;
use crate::indicators::trend::classify_moving_average;
use crate::models::indicators::MovingAverageReading;
use crate::models::signal::Signal;
use crate::models::summary::{AggregationWarning, ClassBreakdown, Recommend, RecommendSummary};
use crate::signals::scoring::map_recommendation;

/// Turns a raw scanner row into a `RecommendSummary`.
///
/// Rows are positional: cell `i` answers column `i` of
/// `columns::analysis_columns()`, and `None` is a `null` from the scanner.
/// Holds no state; every call builds its own tallies.
pub struct Aggregator;

/// Tallies under construction for one row.
#[derive(Default)]
struct Tallies {
    oscillators: ClassBreakdown,
    moving_averages: ClassBreakdown,
    warnings: Vec<AggregationWarning>,
}

impl Tallies {
    fn class_mut(&mut self, category: IndicatorCategory) -> &mut ClassBreakdown {
        match category {
            IndicatorCategory::Oscillator => &mut self.oscillators,
            IndicatorCategory::MovingAverage => &mut self.moving_averages,
        }
    }
}

impl Aggregator {
    /// Map the three leading score columns. The first out-of-domain score
    /// aborts with the offending column name.
    pub fn recommendations(row: &[Option<f64>]) -> Result<Recommend, RecommendationError> {
        Ok(Recommend {
            oscillators: Self::recommend_at(row, OSCILLATORS_RECOMMEND_INDEX)?,
            summary: Self::recommend_at(row, SUMMARY_RECOMMEND_INDEX)?,
            moving_averages: Self::recommend_at(row, MOVING_AVERAGES_RECOMMEND_INDEX)?,
        })
    }

    fn recommend_at(row: &[Option<f64>], index: usize) -> Result<Signal, RecommendationError> {
        // A missing or null score is treated like an unmappable one.
        let score = row.get(index).copied().flatten().unwrap_or(f64::NAN);
        map_recommendation(score).map_err(|source| RecommendationError {
            column: RECOMMEND_COLUMNS[index],
            source,
        })
    }

    /// Aggregate a full analysis row laid out as `columns::analysis_columns()`.
    ///
    /// The row must reach `close`. An indicator with a `null` cell is
    /// skipped and reported as a warning. Moving averages are counted up to
    /// the first missing or `null` position; a short run is reported as a
    /// warning rather than an error.
    pub fn aggregate(row: &[Option<f64>]) -> Result<RecommendSummary, AggregationError> {
        let recommend = Self::recommendations(row)?;

        if row.len() <= CLOSE_INDEX {
            return Err(AggregationError::IncompleteRow {
                required: CLOSE_INDEX + 1,
                actual: row.len(),
            });
        }

        let mut tallies = Tallies::default();
        for rule in &OSCILLATOR_RULES {
            Self::apply(rule, row, &mut tallies);
        }

        let counted = match row[CLOSE_INDEX] {
            Some(close) => Self::moving_averages(row, close, &mut tallies.moving_averages),
            None => 0,
        };
        if counted < MOVING_AVERAGE_COLUMNS.len() {
            warn!(
                expected = MOVING_AVERAGE_COLUMNS.len(),
                counted,
                "Row ends before all moving averages, counting {} of {}",
                counted,
                MOVING_AVERAGE_COLUMNS.len()
            );
            tallies.warnings.push(AggregationWarning::ShortRow {
                expected: MOVING_AVERAGE_COLUMNS.len(),
                counted,
            });
        }

        for rule in &MA_RATING_RULES {
            Self::apply(rule, row, &mut tallies);
        }

        let summary = RecommendSummary::new(
            recommend,
            tallies.oscillators,
            tallies.moving_averages,
            tallies.warnings,
        );

        debug!(
            recommendation = %summary.recommend.summary,
            buy = summary.buy_count,
            sell = summary.sell_count,
            neutral = summary.neutral_count,
            "Summary"
        );
        debug!(
            recommendation = %summary.recommend.oscillators,
            buy = summary.oscillators.counts.buy,
            sell = summary.oscillators.counts.sell,
            neutral = summary.oscillators.counts.neutral,
            computed = ?summary.oscillators.computed,
            "Oscillators"
        );
        debug!(
            recommendation = %summary.recommend.moving_averages,
            buy = summary.moving_averages.counts.buy,
            sell = summary.moving_averages.counts.sell,
            neutral = summary.moving_averages.counts.neutral,
            computed = ?summary.moving_averages.computed,
            "MovingAverages"
        );

        Ok(summary)
    }

    /// Classify the moving-average run against `close`, stopping at the
    /// first missing or `null` average. Returns how many were counted.
    fn moving_averages(row: &[Option<f64>], close: f64, breakdown: &mut ClassBreakdown) -> usize {
        let available = row.len().min(MOVING_AVERAGES_END);
        let mut counted = 0;
        for (name, cell) in MOVING_AVERAGE_COLUMNS
            .iter()
            .zip(&row[MOVING_AVERAGES_START..available])
        {
            let Some(value) = *cell else { break };
            let reading = MovingAverageReading { value, close };
            breakdown.push(name, classify_moving_average(&reading));
            counted += 1;
        }
        counted
    }

    /// Run one rule into the tally its category names. Rules whose cells
    /// lie past the end of the row are skipped silently; rules with a
    /// `null` cell are skipped with a warning.
    fn apply(rule: &ColumnRule, row: &[Option<f64>], tallies: &mut Tallies) {
        if row.len() < rule.offset + rule.kind.arity() {
            return;
        }
        match rule.kind.read_row(&row[rule.offset..]) {
            Some(reading) => tallies
                .class_mut(rule.category)
                .push(rule.name, reading.classify()),
            None => {
                debug!(indicator = rule.name, "Skipping indicator with null input");
                tallies.warnings.push(AggregationWarning::MissingValue {
                    indicator: rule.name.to_string(),
                });
            }
        }
    }
}
