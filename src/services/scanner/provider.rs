//! Scanner orchestrator: builds queries, calls the transport, feeds the
//! aggregator.

use reqwest::{Client, Method};
use tracing::{debug, error};

use crate::config::ScannerConfig;
use crate::error::{AggregationError, Result, ScannerError};
use crate::indicators::columns::{analysis_columns, ICHIMOKU_COLUMNS, PIVOT_COLUMNS, RECOMMEND_COLUMNS};
use crate::models::scan::{Interval, PivotMethod, PivotPoint, ScanRequest, ScanResponse, ScanRow};
use crate::models::signal::Signal;
use crate::models::summary::{Recommend, RecommendSummary};
use crate::services::scanner::client::ScannerClient;
use crate::services::transport::Transport;
use crate::signals::aggregation::Aggregator;
use crate::signals::scoring::map_rating;

/// Ticker in the scanner's `EXCHANGE:SYMBOL` form.
pub fn ticker(exchange: &str, symbol: &str) -> String {
    format!("{}:{}", exchange, symbol)
}

pub struct Scanner<T = ScannerClient> {
    transport: T,
}

impl Scanner<ScannerClient> {
    pub fn new() -> Result<Self> {
        Self::with_config(ScannerConfig::default())
    }

    pub fn with_config(config: ScannerConfig) -> Result<Self> {
        Ok(Self::with_transport(ScannerClient::new(&config)?))
    }

    pub fn with_http_client(config: ScannerConfig, http: Client) -> Result<Self> {
        Ok(Self::with_transport(ScannerClient::with_client(&config, http)?))
    }
}

impl<T: Transport> Scanner<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Serialize a scan request, suffixing every column with the interval.
    pub fn prepare_payload(
        tickers: &[String],
        interval: Interval,
        columns: &[&str],
    ) -> Result<String> {
        let suffix = interval.column_suffix();
        let columns = columns
            .iter()
            .map(|column| format!("{}{}", column, suffix))
            .collect();
        let request = ScanRequest::new(tickers.to_vec(), columns);
        Ok(serde_json::to_string(&request)?)
    }

    async fn scan(&self, tickers: &[String], interval: Interval, columns: &[&str]) -> Result<ScanResponse> {
        let payload = Self::prepare_payload(tickers, interval, columns)?;

        let body = self
            .transport
            .send(Method::POST, payload, false)
            .await
            .map_err(|e| {
                error!(tickers = ?tickers, error = %e, "Exchange or symbol not found");
                e
            })?;

        let response: ScanResponse = serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "Failed to parse scanner response");
            e
        })?;

        debug!(
            rows = response.data.len(),
            total_count = response.total_count,
            "Scanner response received"
        );
        Ok(response)
    }

    async fn scan_symbol(
        &self,
        exchange: &str,
        symbol: &str,
        interval: Interval,
        columns: &[&str],
    ) -> Result<ScanRow> {
        let ticker = ticker(exchange, symbol);
        let response = self.scan(std::slice::from_ref(&ticker), interval, columns).await?;
        response
            .data
            .into_iter()
            .next()
            .ok_or(ScannerError::EmptyResponse(ticker))
    }

    /// Full technical analysis for one symbol.
    pub async fn get_analysis(
        &self,
        exchange: &str,
        symbol: &str,
        interval: Interval,
    ) -> Result<RecommendSummary> {
        let row = self
            .scan_symbol(exchange, symbol, interval, &analysis_columns())
            .await?;
        Aggregator::aggregate(&row.data).map_err(|e| {
            error!(symbol = %row.symbol, error = %e, "Aggregation failed");
            ScannerError::from(e)
        })
    }

    /// Analyse several symbols of one exchange with a single request.
    /// Each returned row is aggregated on its own, so one bad row does not
    /// hide the others.
    pub async fn get_analyses(
        &self,
        exchange: &str,
        symbols: &[&str],
        interval: Interval,
    ) -> Result<Vec<(String, std::result::Result<RecommendSummary, AggregationError>)>> {
        let tickers: Vec<String> = symbols.iter().map(|s| ticker(exchange, s)).collect();
        let response = self.scan(&tickers, interval, &analysis_columns()).await?;

        Ok(response
            .data
            .into_iter()
            .map(|row| {
                let result = Aggregator::aggregate(&row.data);
                if let Err(e) = &result {
                    error!(symbol = %row.symbol, error = %e, "Aggregation failed");
                }
                (row.symbol, result)
            })
            .collect())
    }

    /// Only the scanner's own three recommendation scores.
    pub async fn get_recommendations(
        &self,
        exchange: &str,
        symbol: &str,
        interval: Interval,
    ) -> Result<Recommend> {
        let row = self
            .scan_symbol(exchange, symbol, interval, &RECOMMEND_COLUMNS)
            .await?;
        let recommend = Aggregator::recommendations(&row.data)?;
        debug!(
            summary = %recommend.summary,
            oscillators = %recommend.oscillators,
            moving_averages = %recommend.moving_averages,
            "Recommendations"
        );
        Ok(recommend)
    }

    /// Ichimoku rating and base line value.
    pub async fn get_ichimoku(
        &self,
        exchange: &str,
        symbol: &str,
        interval: Interval,
    ) -> Result<(Signal, f64)> {
        let row = self
            .scan_symbol(exchange, symbol, interval, &ICHIMOKU_COLUMNS)
            .await?;
        let values = row.values();
        match values.as_slice() {
            [rating, base_line, ..] => {
                let signal = map_rating(*rating);
                debug!(signal = %signal, base_line = *base_line, "Ichimoku");
                Ok((signal, *base_line))
            }
            _ => Err(AggregationError::IncompleteRow {
                required: ICHIMOKU_COLUMNS.len(),
                actual: values.len(),
            }
            .into()),
        }
    }

    /// Monthly pivot levels for every pivot method the scanner offers.
    pub async fn get_pivots(
        &self,
        exchange: &str,
        symbol: &str,
        interval: Interval,
    ) -> Result<Vec<PivotPoint>> {
        let row = self
            .scan_symbol(exchange, symbol, interval, &PIVOT_COLUMNS)
            .await?;
        Ok(PIVOT_COLUMNS
            .iter()
            .zip(row.data.iter().copied().chain(std::iter::repeat(None)))
            .filter_map(|(column, value)| parse_pivot_column(column, value))
            .collect())
    }
}

/// `Pivot.M.<Method>.<Level>` → `PivotPoint`.
fn parse_pivot_column(column: &str, value: Option<f64>) -> Option<PivotPoint> {
    let mut parts = column.split('.').skip(2);
    let method: PivotMethod = parts.next()?.parse().ok()?;
    let level = parts.next()?.to_string();
    Some(PivotPoint {
        method,
        level,
        value,
    })
}
