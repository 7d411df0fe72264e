//! Unit tests for row aggregation

use std::error::Error;

use tvscanner::error::{AggregationError, DomainError, RecommendationError};
use tvscanner::indicators::columns::{ANALYSIS_ROW_LEN, CLOSE_INDEX};
use tvscanner::models::{AggregationWarning, Signal};
use tvscanner::signals::aggregation::Aggregator;

/// Full analysis row where every indicator classifies as neutral.
fn neutral_cells() -> Vec<f64> {
    let mut row = vec![0.0; ANALYSIS_ROW_LEN];
    // RSI, RSI[1]
    row[3] = 50.0;
    row[4] = 50.0;
    // Stoch.K, Stoch.D, Stoch.K[1], Stoch.D[1]
    row[5..9].copy_from_slice(&[50.0, 50.0, 50.0, 50.0]);
    // ADX below trend strength
    row[11..16].copy_from_slice(&[10.0, 20.0, 20.0, 20.0, 20.0]);
    // Mom, Mom[1]
    row[18] = 1.0;
    row[19] = 1.0;
    row[CLOSE_INDEX] = 100.0;
    // Every moving average equals close.
    for cell in &mut row[31..43] {
        *cell = 100.0;
    }
    row
}

fn neutral_row() -> Vec<Option<f64>> {
    neutral_cells().into_iter().map(Some).collect()
}

/// Mixed row: three oscillator buys (RSI, MACD, UO), one oscillator sell
/// (Mom) and two moving-average buys (EMA10, Ichimoku).
fn mixed_row() -> Vec<Option<f64>> {
    let mut row = neutral_cells();
    row[0] = -0.6;
    row[1] = 0.3;
    row[2] = 0.0;
    row[3] = 25.0;
    row[4] = 28.0;
    row[18] = 1.0;
    row[19] = 2.0;
    row[20] = 1.0;
    row[21] = 0.5;
    row[28] = 1.0;
    row[31] = 90.0;
    row[43] = 1.0;
    row.into_iter().map(Some).collect()
}

#[test]
fn test_aggregate_full_row() {
    let summary = Aggregator::aggregate(&mixed_row()).unwrap();

    assert_eq!(summary.recommend.summary, Signal::Buy);
    assert_eq!(summary.recommend.oscillators, Signal::StrongSell);
    assert_eq!(summary.recommend.moving_averages, Signal::Neutral);

    assert_eq!(summary.buy_count, 5);
    assert_eq!(summary.sell_count, 1);
    assert_eq!(summary.neutral_count, 20);
    assert!(summary.warnings.is_empty());
}

#[test]
fn test_aggregate_class_breakdowns() {
    let summary = Aggregator::aggregate(&mixed_row()).unwrap();

    let osc = &summary.oscillators;
    assert_eq!(osc.computed.len(), 11);
    assert_eq!((osc.counts.buy, osc.counts.sell, osc.counts.neutral), (3, 1, 7));
    assert_eq!(osc.get("RSI"), Some(Signal::Buy));
    assert_eq!(osc.get("MACD"), Some(Signal::Buy));
    assert_eq!(osc.get("UO"), Some(Signal::Buy));
    assert_eq!(osc.get("Mom"), Some(Signal::Sell));
    assert_eq!(osc.get("CCI"), Some(Signal::Neutral));

    let ma = &summary.moving_averages;
    assert_eq!(ma.computed.len(), 15);
    assert_eq!((ma.counts.buy, ma.counts.sell, ma.counts.neutral), (2, 0, 13));
    assert_eq!(ma.get("EMA10"), Some(Signal::Buy));
    assert_eq!(ma.get("SMA10"), Some(Signal::Neutral));
    assert_eq!(ma.get("Ichimoku"), Some(Signal::Buy));
    assert_eq!(ma.get("HullMA"), Some(Signal::Neutral));
}

#[test]
fn test_counts_cover_every_classification() {
    let summary = Aggregator::aggregate(&mixed_row()).unwrap();
    let total = summary.oscillators.computed.len() + summary.moving_averages.computed.len();
    assert_eq!(summary.counts().total(), total);
}

#[test]
fn test_moving_average_above_close_is_sell() {
    let mut row = neutral_row();
    row[42] = Some(120.0);
    let summary = Aggregator::aggregate(&row).unwrap();
    assert_eq!(summary.moving_averages.get("SMA200"), Some(Signal::Sell));
    assert_eq!(summary.sell_count, 1);
}

#[test]
fn test_aggregate_is_idempotent() {
    let row = mixed_row();
    let first = Aggregator::aggregate(&row).unwrap();
    let second = Aggregator::aggregate(&row).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_null_in_unread_column_is_ignored() {
    // W.R raw value; only Rec.WR is classified.
    let mut row = mixed_row();
    row[25] = None;
    let summary = Aggregator::aggregate(&row).unwrap();

    assert_eq!(summary, Aggregator::aggregate(&mixed_row()).unwrap());
}

#[test]
fn test_null_indicator_input_skips_only_that_indicator() {
    // RSI[1]
    let mut row = mixed_row();
    row[4] = None;
    let summary = Aggregator::aggregate(&row).unwrap();

    assert_eq!(summary.oscillators.get("RSI"), None);
    assert_eq!(summary.oscillators.computed.len(), 10);
    assert_eq!(summary.oscillators.get("MACD"), Some(Signal::Buy));
    assert_eq!(summary.moving_averages.computed.len(), 15);
    assert_eq!(
        summary.warnings,
        vec![AggregationWarning::MissingValue {
            indicator: "RSI".to_string(),
        }]
    );
}

#[test]
fn test_null_base_line_keeps_later_ratings() {
    // Ichimoku.BLine
    let mut row = mixed_row();
    row[44] = None;
    let summary = Aggregator::aggregate(&row).unwrap();

    assert_eq!(summary.moving_averages.get("Ichimoku"), Some(Signal::Buy));
    assert_eq!(summary.moving_averages.get("VWMA"), Some(Signal::Neutral));
    assert_eq!(summary.moving_averages.get("HullMA"), Some(Signal::Neutral));
    assert!(summary.warnings.is_empty());
}

#[test]
fn test_null_moving_average_ends_the_run() {
    let mut row = mixed_row();
    row[36] = None;
    let summary = Aggregator::aggregate(&row).unwrap();

    // EMA10..EMA30 counted, SMA30 onwards not, ratings still applied.
    assert_eq!(summary.moving_averages.get("EMA30"), Some(Signal::Neutral));
    assert_eq!(summary.moving_averages.get("SMA30"), None);
    assert_eq!(summary.moving_averages.get("EMA50"), None);
    assert_eq!(summary.moving_averages.get("SMA200"), None);
    assert_eq!(summary.moving_averages.get("Ichimoku"), Some(Signal::Buy));
    assert_eq!(
        summary.warnings,
        vec![AggregationWarning::ShortRow {
            expected: 12,
            counted: 5,
        }]
    );
}

#[test]
fn test_short_row_counts_available_moving_averages() {
    // Row ends after the ninth moving average.
    let full = mixed_row();
    let summary = Aggregator::aggregate(&full[..40]).unwrap();

    assert_eq!(summary.moving_averages.computed.len(), 9);
    assert_eq!(summary.moving_averages.get("EMA200"), None);
    assert_eq!(summary.moving_averages.get("Ichimoku"), None);
    assert_eq!(
        summary.warnings,
        vec![AggregationWarning::ShortRow {
            expected: 12,
            counted: 9,
        }]
    );
    assert_eq!(summary.counts().total(), 11 + 9);
}

#[test]
fn test_missing_trailing_ratings_are_skipped() {
    // All moving averages plus the Ichimoku rating, nothing after.
    let full = mixed_row();
    let summary = Aggregator::aggregate(&full[..44]).unwrap();

    assert_eq!(summary.moving_averages.computed.len(), 13);
    assert_eq!(summary.moving_averages.get("Ichimoku"), Some(Signal::Buy));
    assert_eq!(summary.moving_averages.get("VWMA"), None);
    assert!(summary.warnings.is_empty());
}

#[test]
fn test_row_without_close_is_incomplete() {
    let full = mixed_row();
    assert_eq!(
        Aggregator::aggregate(&full[..CLOSE_INDEX]),
        Err(AggregationError::IncompleteRow {
            required: 31,
            actual: 30,
        })
    );
}

#[test]
fn test_null_close_counts_no_moving_averages() {
    let mut row = mixed_row();
    row[CLOSE_INDEX] = None;
    let summary = Aggregator::aggregate(&row).unwrap();

    assert_eq!(summary.oscillators.computed.len(), 11);
    assert_eq!(summary.moving_averages.computed.len(), 3);
    assert_eq!(
        summary.warnings,
        vec![AggregationWarning::ShortRow {
            expected: 12,
            counted: 0,
        }]
    );
}

#[test]
fn test_out_of_domain_score_names_column() {
    let mut row = mixed_row();
    row[1] = Some(1.5);
    let err = Aggregator::aggregate(&row).unwrap_err();
    assert_eq!(
        err,
        AggregationError::Recommendation(RecommendationError {
            column: "Recommend.All",
            source: DomainError { score: 1.5 },
        })
    );
    assert_eq!(err.to_string(), "failed to compute recommendation for Recommend.All");
    assert!(err.source().is_some());
}

#[test]
fn test_first_invalid_score_wins() {
    let mut row = mixed_row();
    row[0] = Some(-3.0);
    row[2] = Some(4.0);
    match Aggregator::aggregate(&row) {
        Err(AggregationError::Recommendation(e)) => assert_eq!(e.column, "Recommend.Other"),
        other => panic!("expected recommendation error, got {:?}", other),
    }
}

#[test]
fn test_missing_score_is_rejected() {
    let err = Aggregator::recommendations(&[Some(0.2), Some(0.4)]).unwrap_err();
    assert_eq!(err.column, "Recommend.MA");
    assert!(err.source.score.is_nan());

    let err = Aggregator::recommendations(&[Some(0.2), None, Some(0.4)]).unwrap_err();
    assert_eq!(err.column, "Recommend.All");
}

#[test]
fn test_recommendations_only() {
    let recommend = Aggregator::recommendations(&[Some(0.7), Some(-0.2), Some(-1.0)]).unwrap();
    assert_eq!(recommend.oscillators, Signal::StrongBuy);
    assert_eq!(recommend.summary, Signal::Sell);
    assert_eq!(recommend.moving_averages, Signal::StrongSell);
}
