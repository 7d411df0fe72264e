//! tvscanner
//!
//! Usage: tvscanner <EXCHANGE> <SYMBOL> [INTERVAL] [analysis|recommend|ichimoku|pivots]

use dotenvy::dotenv;
use std::env;
use tracing::info;
use tvscanner::config::ScannerConfig;
use tvscanner::logging;
use tvscanner::models::{Interval, RecommendSummary};
use tvscanner::Scanner;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let (exchange, symbol) = match (args.first(), args.get(1)) {
        (Some(exchange), Some(symbol)) => (exchange.as_str(), symbol.as_str()),
        _ => {
            return Err(
                "usage: tvscanner <EXCHANGE> <SYMBOL> [INTERVAL] [analysis|recommend|ichimoku|pivots]"
                    .into(),
            )
        }
    };
    let interval = Interval::parse_or_default(args.get(2).map(String::as_str).unwrap_or(""));
    let mode = args.get(3).map(String::as_str).unwrap_or("analysis");

    let config = ScannerConfig::from_env();
    info!(
        exchange,
        symbol,
        interval = %interval,
        screener = %config.screener,
        "Querying scanner"
    );
    let scanner = Scanner::with_config(config)?;

    match mode {
        "recommend" => {
            let recommend = scanner.get_recommendations(exchange, symbol, interval).await?;
            println!("Summary: {}", recommend.summary);
            println!("Oscillators: {}", recommend.oscillators);
            println!("Moving averages: {}", recommend.moving_averages);
        }
        "ichimoku" => {
            let (signal, base_line) = scanner.get_ichimoku(exchange, symbol, interval).await?;
            println!("Ichimoku: {} (base line {:.4})", signal, base_line);
        }
        "pivots" => {
            for pivot in scanner.get_pivots(exchange, symbol, interval).await? {
                match pivot.value {
                    Some(value) => println!("{:?} {}: {:.4}", pivot.method, pivot.level, value),
                    None => println!("{:?} {}: n/a", pivot.method, pivot.level),
                }
            }
        }
        "analysis" => {
            let summary = scanner.get_analysis(exchange, symbol, interval).await?;
            print_summary(&summary);
        }
        other => return Err(format!("unknown mode: {}", other).into()),
    }

    Ok(())
}

fn print_summary(summary: &RecommendSummary) {
    println!(
        "Summary - RECOMMENDATION: {}, BUY: {}, SELL: {}, NEUTRAL: {}",
        summary.recommend.summary, summary.buy_count, summary.sell_count, summary.neutral_count
    );
    for (label, recommendation, breakdown) in [
        ("Oscillators", summary.recommend.oscillators, &summary.oscillators),
        (
            "MovingAverages",
            summary.recommend.moving_averages,
            &summary.moving_averages,
        ),
    ] {
        println!(
            "{} - RECOMMENDATION: {}, BUY: {}, SELL: {}, NEUTRAL: {}",
            label,
            recommendation,
            breakdown.counts.buy,
            breakdown.counts.sell,
            breakdown.counts.neutral
        );
        for entry in &breakdown.computed {
            println!("  {}: {}", entry.name, entry.signal);
        }
    }
    for warning in &summary.warnings {
        println!("Warning: {:?}", warning);
    }
}
