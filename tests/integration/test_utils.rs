use std::time::Duration;

use serde_json::{json, Value};
use tvscanner::config::ScannerConfig;
use tvscanner::Scanner;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SCAN_PATH: &str = "/crypto/scan";
pub const TICKER: &str = "BINANCE:BTCUSDT";

/// Scanner pointed at the mock server with a short timeout.
pub fn scanner_for(server: &MockServer) -> Scanner {
    scanner_with_timeout(server, Duration::from_secs(2))
}

pub fn scanner_with_timeout(server: &MockServer, timeout: Duration) -> Scanner {
    let config = ScannerConfig::default()
        .with_base_url(server.uri())
        .with_timeout(timeout);
    Scanner::with_config(config).expect("scanner from mock config")
}

/// Analysis row: summary BUY, oscillators STRONG_SELL, moving averages
/// NEUTRAL. Classifies to 5 buys, 1 sell and 20 neutrals.
pub fn analysis_row() -> Vec<Option<f64>> {
    let mut row = vec![0.0; 49];
    row[0] = -0.6;
    row[1] = 0.3;
    row[2] = 0.0;
    // RSI buy
    row[3] = 25.0;
    row[4] = 28.0;
    row[5..9].copy_from_slice(&[50.0, 50.0, 50.0, 50.0]);
    row[11..16].copy_from_slice(&[10.0, 20.0, 20.0, 20.0, 20.0]);
    // Mom sell
    row[18] = 1.0;
    row[19] = 2.0;
    // MACD buy
    row[20] = 1.0;
    row[21] = 0.5;
    // Rec.UO buy
    row[28] = 1.0;
    row[30] = 100.0;
    for cell in &mut row[31..43] {
        *cell = 100.0;
    }
    // EMA10 below close
    row[31] = 90.0;
    // Rec.Ichimoku buy
    row[43] = 1.0;
    row.into_iter().map(Some).collect()
}

pub fn scan_body(rows: &[(&str, Vec<Option<f64>>)]) -> Value {
    let data: Vec<Value> = rows
        .iter()
        .map(|(symbol, cells)| json!({ "s": symbol, "d": cells }))
        .collect();
    json!({ "totalCount": data.len(), "data": data })
}

/// Answer every scan request with `body`.
pub async fn mock_scan(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path(SCAN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
