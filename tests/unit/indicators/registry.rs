//! Unit tests for the indicator decision table

use tvscanner::indicators::columns::*;
use tvscanner::indicators::rating::classify_rating;
use tvscanner::indicators::registry::*;
use tvscanner::models::indicators::*;
use tvscanner::models::Signal;

#[test]
fn test_rating_values() {
    let rating = |value| classify_rating(&RatingReading { value });
    assert_eq!(rating(1.0), Signal::Buy);
    assert_eq!(rating(-1.0), Signal::Sell);
    assert_eq!(rating(0.0), Signal::Neutral);
    assert_eq!(rating(0.5), Signal::Neutral);
    assert_eq!(rating(2.0), Signal::Neutral);
}

#[test]
fn test_arity() {
    assert_eq!(IndicatorKind::Rating.arity(), 1);
    assert_eq!(IndicatorKind::Rsi.arity(), 2);
    assert_eq!(IndicatorKind::Stochastic.arity(), 4);
    assert_eq!(IndicatorKind::Adx.arity(), 5);
}

#[test]
fn test_read_uses_scanner_column_order() {
    let reading = IndicatorKind::Stochastic
        .read(&[15.0, 10.0, 8.0, 12.0, 99.0])
        .expect("enough cells");
    assert_eq!(
        reading,
        IndicatorReading::Stochastic(StochasticReading {
            k: 15.0,
            d: 10.0,
            previous_k: 8.0,
            previous_d: 12.0,
        })
    );
    assert_eq!(reading.kind(), IndicatorKind::Stochastic);
    assert_eq!(reading.classify(), Signal::Buy);
}

#[test]
fn test_read_with_too_few_cells() {
    assert!(IndicatorKind::Adx.read(&[25.0, 30.0, 20.0, 18.0]).is_none());
    assert!(IndicatorKind::Rating.read(&[]).is_none());
}

#[test]
fn test_band_readers() {
    let lower = IndicatorKind::BollingerLower.read(&[90.0, 95.0]).unwrap();
    let upper = IndicatorKind::BollingerUpper.read(&[110.0, 105.0]).unwrap();
    assert_eq!(lower.classify(), Signal::Buy);
    assert_eq!(upper.classify(), Signal::Sell);
}

#[test]
fn test_reading_dispatch_matches_direct_classifier() {
    let cases: [(IndicatorKind, &[f64], Signal); 7] = [
        (IndicatorKind::MovingAverage, &[100.0, 105.0], Signal::Buy),
        (IndicatorKind::Rsi, &[75.0, 72.0], Signal::Sell),
        (IndicatorKind::Cci, &[-150.0, -200.0], Signal::Buy),
        (IndicatorKind::AwesomeOscillator, &[-2.0, -1.0], Signal::Sell),
        (IndicatorKind::Momentum, &[1.0, 1.0], Signal::Neutral),
        (IndicatorKind::Macd, &[0.5, 1.0], Signal::Sell),
        (IndicatorKind::ParabolicSar, &[95.0, 100.0], Signal::Buy),
    ];
    for (kind, cells, expected) in cases {
        let reading = kind.read(cells).unwrap();
        assert_eq!(reading.classify(), expected, "{:?}", kind);
    }
}

#[test]
fn test_read_row_skips_null_cells() {
    assert_eq!(
        IndicatorKind::Macd.read_row(&[Some(1.0), Some(0.5), None]),
        Some(IndicatorReading::Macd(MacdReading {
            macd: 1.0,
            signal: 0.5,
        }))
    );
    assert!(IndicatorKind::Rsi.read_row(&[Some(25.0), None]).is_none());
    assert!(IndicatorKind::Rsi.read_row(&[Some(25.0)]).is_none());
}

#[test]
fn test_rule_categories() {
    for rule in &OSCILLATOR_RULES {
        assert_eq!(rule.category, IndicatorCategory::Oscillator, "{}", rule.name);
    }
    for rule in &MA_RATING_RULES {
        assert_eq!(rule.category, IndicatorCategory::MovingAverage, "{}", rule.name);
        assert_eq!(rule.kind, IndicatorKind::Rating);
    }
}

#[test]
fn test_analysis_columns_match_rule_offsets() {
    let columns = analysis_columns();
    assert_eq!(columns.len(), ANALYSIS_ROW_LEN);
    assert_eq!(columns[CLOSE_INDEX], "close");
    let named: Vec<(&str, &str)> = OSCILLATOR_RULES
        .iter()
        .chain(MA_RATING_RULES.iter())
        .map(|rule| (rule.name, columns[rule.offset]))
        .collect();
    assert_eq!(named[0], ("RSI", "RSI"));
    assert_eq!(named[3], ("ADX", "ADX"));
    assert_eq!(named[8], ("W%R", "Rec.WR"));
    assert_eq!(named[11], ("Ichimoku", "Rec.Ichimoku"));
    assert_eq!(named[13], ("HullMA", "Rec.HullMA9"));
}
